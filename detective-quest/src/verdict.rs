use serde::Serialize;

use crate::clues::ClueIndex;
use crate::events::Event;
use crate::suspects::SuspectDirectory;

/// An accusation needs at least this many corroborating clues to stick.
pub const CONVICTION_THRESHOLD: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Guilty,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Judgement {
    pub accused: String,
    #[serde(rename = "matchCount")]
    pub match_count: usize,
    pub verdict: Verdict,
}

impl Judgement {
    pub fn guilty(&self) -> bool {
        self.verdict == Verdict::Guilty
    }

    pub fn to_event(&self) -> Event {
        Event::Verdict {
            accused: self.accused.clone(),
            match_count: self.match_count,
            guilty: self.guilty(),
        }
    }
}

/// Counts collected clues whose recorded suspect matches the accusation
/// exactly (case-sensitive, no normalization) and renders the verdict.
/// Clues implicating nobody on record simply do not count.
pub fn evaluate(clues: &ClueIndex, directory: &SuspectDirectory, accused: &str) -> Judgement {
    let match_count = clues.count_matching(|text| directory.lookup(text) == Some(accused));
    let verdict = if match_count >= CONVICTION_THRESHOLD {
        Verdict::Guilty
    } else {
        Verdict::Rejected
    };
    tracing::debug!(accused, match_count, ?verdict, "accusation evaluated");
    Judgement {
        accused: accused.to_string(),
        match_count,
        verdict,
    }
}

/// Final artifact of a run; the CLI prints it as pretty JSON.
#[derive(Debug, Clone, Serialize)]
pub struct CaseReport {
    pub clues: Vec<ClueLine>,
    pub judgement: Judgement,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClueLine {
    pub text: String,
    pub suspect: Option<String>,
}

pub fn case_report(
    clues: &ClueIndex,
    directory: &SuspectDirectory,
    judgement: Judgement,
) -> CaseReport {
    let clues = clues
        .iter()
        .map(|text| ClueLine {
            text: text.to_string(),
            suspect: directory.lookup(text).map(str::to_string),
        })
        .collect();
    CaseReport { clues, judgement }
}
