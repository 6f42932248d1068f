use thiserror::Error;

/// Default bucket count; a small prime distributes the fixture clues well.
pub const DEFAULT_TABLE_CAPACITY: usize = 13;

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("suspect table capacity must be non-zero")]
    ZeroCapacity,
}

/// Fixed-capacity hash table mapping clue text to the implicated suspect.
/// Collisions chain off the bucket head; inserting an existing key prepends
/// a shadowing entry, so lookups always see the most recent value.
#[derive(Debug, Clone)]
pub struct SuspectDirectory {
    buckets: Vec<Option<Box<ChainEntry>>>,
}

#[derive(Debug, Clone)]
struct ChainEntry {
    clue: String,
    suspect: String,
    next: Option<Box<ChainEntry>>,
}

impl SuspectDirectory {
    pub fn new() -> Self {
        Self {
            buckets: vec![None; DEFAULT_TABLE_CAPACITY],
        }
    }

    pub fn with_capacity(capacity: usize) -> Result<Self, DirectoryError> {
        if capacity == 0 {
            return Err(DirectoryError::ZeroCapacity);
        }
        Ok(Self {
            buckets: vec![None; capacity],
        })
    }

    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    // Polynomial rolling hash over the key bytes, seed 0, reduced modulo the
    // capacity at every step: h = (h * 31 + byte) % capacity.
    fn bucket_of(&self, key: &str) -> usize {
        key.bytes()
            .fold(0usize, |h, b| (h * 31 + b as usize) % self.buckets.len())
    }

    pub fn insert(&mut self, clue: impl Into<String>, suspect: impl Into<String>) {
        let clue = clue.into();
        let suspect = suspect.into();
        let bucket = self.bucket_of(&clue);
        let next = self.buckets[bucket].take();
        if next.is_some() {
            tracing::debug!(bucket, clue = clue.as_str(), "chaining onto occupied bucket");
        }
        self.buckets[bucket] = Some(Box::new(ChainEntry { clue, suspect, next }));
    }

    /// The most recently inserted suspect for `clue`, or `None` when the
    /// clue implicates nobody on record. Absence is a defined result, not
    /// an error.
    pub fn lookup(&self, clue: &str) -> Option<&str> {
        let mut entry = self.buckets[self.bucket_of(clue)].as_deref();
        while let Some(e) = entry {
            if e.clue == clue {
                return Some(&e.suspect);
            }
            entry = e.next.as_deref();
        }
        None
    }
}

impl Default for SuspectDirectory {
    fn default() -> Self {
        Self::new()
    }
}
