//! Detective Quest: explore a mansion, collect clues, accuse a suspect.

pub mod case;
pub mod clues;
pub mod events;
pub mod explore;
pub mod rooms;
pub mod suspects;
pub mod verdict;

#[cfg(test)]
mod scenario_test;

pub use clues::ClueIndex;
pub use events::Event;
pub use explore::{Command, CommandSource, EventSink, Exploration, LeafPolicy, ScriptedSource};
pub use rooms::Room;
pub use suspects::SuspectDirectory;
pub use verdict::{evaluate, Judgement, Verdict};
