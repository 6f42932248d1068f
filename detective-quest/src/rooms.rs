/// A room of the mansion, one node of the fixed binary tree the player
/// explores. Rooms are built once by the case fixture and never mutated
/// afterwards; each child is owned exclusively by its parent.
#[derive(Debug, Clone)]
pub struct Room {
    name: String,
    clue: Option<String>,
    left: Option<Box<Room>>,
    right: Option<Box<Room>>,
}

impl Room {
    /// A room with nothing to find in it.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            clue: None,
            left: None,
            right: None,
        }
    }

    /// A room holding a clue.
    pub fn with_clue(name: impl Into<String>, clue: impl Into<String>) -> Self {
        Self {
            clue: Some(clue.into()),
            ..Self::new(name)
        }
    }

    pub fn with_left(mut self, room: Room) -> Self {
        self.left = Some(Box::new(room));
        self
    }

    pub fn with_right(mut self, room: Room) -> Self {
        self.right = Some(Box::new(room));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The clue placed in this room, if any. Case authors may leave the
    /// clue empty; callers treat an empty string as no clue.
    pub fn clue(&self) -> Option<&str> {
        self.clue.as_deref()
    }

    pub fn left(&self) -> Option<&Room> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Room> {
        self.right.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}
