use std::collections::VecDeque;
use std::str::FromStr;

use anyhow::Result;

use crate::clues::ClueIndex;
use crate::events::Event;
use crate::rooms::Room;

/// One navigation command from the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Left,
    Right,
    Quit,
}

#[derive(Debug, thiserror::Error)]
#[error("unrecognized command {0:?} (expected e/left, d/right or s/quit)")]
pub struct ParseCommandError(String);

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "e" | "left" => Ok(Command::Left),
            "d" | "right" => Ok(Command::Right),
            "s" | "quit" => Ok(Command::Quit),
            _ => Err(ParseCommandError(s.to_string())),
        }
    }
}

/// What happens when the player enters a dead-end room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeafPolicy {
    /// The player must still issue an explicit quit.
    #[default]
    RequireQuit,
    /// Entering a childless room ends the exploration immediately.
    AutoQuit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Moves offered from the current room, by destination name.
#[derive(Debug, Clone, Copy)]
pub struct Moves<'a> {
    pub left: Option<&'a str>,
    pub right: Option<&'a str>,
}

/// The exploration state machine: one `at(room)` state per reachable room
/// plus a terminal `finished` state. Entering a room collects its clue into
/// the index; invalid choices leave the state untouched.
pub struct Exploration<'m> {
    current: &'m Room,
    policy: LeafPolicy,
    trail: Vec<Direction>,
    finished: bool,
}

impl<'m> Exploration<'m> {
    /// Enters the root room and reports what is found there.
    pub fn start(root: &'m Room, clues: &mut ClueIndex, policy: LeafPolicy) -> (Self, Vec<Event>) {
        let mut exploration = Self {
            current: root,
            policy,
            trail: Vec::new(),
            finished: false,
        };
        let mut events = Vec::new();
        exploration.enter(root, clues, &mut events);
        (exploration, events)
    }

    pub fn current_room(&self) -> &'m Room {
        self.current
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Accepted moves so far, in order; replaying them from the root leads
    /// back to the current room.
    pub fn trail(&self) -> &[Direction] {
        &self.trail
    }

    pub fn available_moves(&self) -> Moves<'m> {
        Moves {
            left: self.current.left().map(|room| room.name()),
            right: self.current.right().map(|room| room.name()),
        }
    }

    /// Applies one command. `Quit` finishes; a direction with an existing
    /// child moves there; anything else reports an invalid choice and stays
    /// put, so the loop never terminates on bad input.
    pub fn step(&mut self, clues: &mut ClueIndex, command: Command) -> Vec<Event> {
        let mut events = Vec::new();
        if self.finished {
            return events;
        }
        match command {
            Command::Quit => {
                tracing::debug!("exploration ended by quit");
                self.finished = true;
                events.push(Event::ExplorationEnded);
            }
            Command::Left => match self.current.left() {
                Some(next) => {
                    self.trail.push(Direction::Left);
                    self.enter(next, clues, &mut events);
                }
                None => events.push(Event::InvalidChoice {
                    input: "left".to_string(),
                }),
            },
            Command::Right => match self.current.right() {
                Some(next) => {
                    self.trail.push(Direction::Right);
                    self.enter(next, clues, &mut events);
                }
                None => events.push(Event::InvalidChoice {
                    input: "right".to_string(),
                }),
            },
        }
        events
    }

    fn enter(&mut self, room: &'m Room, clues: &mut ClueIndex, events: &mut Vec<Event>) {
        self.current = room;
        tracing::debug!(room = room.name(), "entering room");
        events.push(Event::RoomEntered {
            name: room.name().to_string(),
        });
        match room.clue().filter(|clue| !clue.is_empty()) {
            Some(clue) => {
                clues.insert(clue);
                events.push(Event::ClueFound {
                    text: clue.to_string(),
                });
            }
            None => events.push(Event::ClueAbsent),
        }
        if self.policy == LeafPolicy::AutoQuit && room.is_leaf() {
            tracing::debug!(room = room.name(), "dead end, auto-quitting");
            self.finished = true;
            events.push(Event::ExplorationEnded);
        }
    }
}

/// Supplies navigation tokens to the exploration loop. Implementations
/// block until the next token is available; `Ok(None)` means the stream
/// ended.
pub trait CommandSource {
    fn next_token(&mut self) -> Result<Option<String>>;
}

/// Receives structured progress events for rendering.
pub trait EventSink {
    fn emit(&mut self, event: &Event);

    /// Called before each read with the moves currently on offer.
    fn offer(&mut self, moves: Moves<'_>) {
        let _ = moves;
    }
}

impl EventSink for Vec<Event> {
    fn emit(&mut self, event: &Event) {
        self.push(event.clone());
    }
}

/// A pre-recorded command stream.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    tokens: VecDeque<String>,
}

impl ScriptedSource {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }
}

impl CommandSource for ScriptedSource {
    fn next_token(&mut self) -> Result<Option<String>> {
        Ok(self.tokens.pop_front())
    }
}

/// Drives the loop to completion: one token per step, parse failures
/// surface as `InvalidChoice`, and a stream that ends before an explicit
/// quit counts as quitting. Returns the final machine for inspection.
pub fn run<'m>(
    root: &'m Room,
    clues: &mut ClueIndex,
    source: &mut dyn CommandSource,
    sink: &mut dyn EventSink,
    policy: LeafPolicy,
) -> Result<Exploration<'m>> {
    let (mut exploration, events) = Exploration::start(root, clues, policy);
    for event in &events {
        sink.emit(event);
    }
    while !exploration.is_finished() {
        sink.offer(exploration.available_moves());
        let Some(token) = source.next_token()? else {
            tracing::debug!("command stream ended, treating as quit");
            for event in &exploration.step(clues, Command::Quit) {
                sink.emit(event);
            }
            break;
        };
        match token.parse::<Command>() {
            Ok(command) => {
                for event in &exploration.step(clues, command) {
                    sink.emit(event);
                }
            }
            Err(err) => {
                tracing::debug!(%err, "rejecting token");
                sink.emit(&Event::InvalidChoice { input: token });
            }
        }
    }
    Ok(exploration)
}
