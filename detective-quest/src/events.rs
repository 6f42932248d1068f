use serde::Serialize;

/// Structured progress events emitted by the exploration loop and the
/// judgement phase. A presentation layer renders these as text; the core
/// never formats console output itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum Event {
    RoomEntered {
        name: String,
    },
    ClueFound {
        text: String,
    },
    ClueAbsent,
    InvalidChoice {
        input: String,
    },
    ExplorationEnded,
    ClueListed {
        text: String,
        suspect: Option<String>,
    },
    Verdict {
        accused: String,
        #[serde(rename = "matchCount")]
        match_count: usize,
        guilty: bool,
    },
}
