use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::round::{Round, RoundScores};
use crate::model::tournament::Tournament;

pub const COMPLETE_STATUS: &str = "complete";
pub const UNKNOWN_PLAYER_NAME: &str = "Unknown Player";

/// A player's display name. Upstream rows missing either name part carry `Unknown`
/// rather than a stringified null.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PlayerName {
    Known(String),
    Unknown,
}

impl PlayerName {
    #[must_use]
    pub fn from_parts(first: Option<&str>, last: Option<&str>) -> Self {
        fn present(part: Option<&str>) -> Option<&str> {
            part.map(str::trim).filter(|p| !p.is_empty())
        }
        match (present(first), present(last)) {
            (Some(first), Some(last)) => Self::Known(format!("{first} {last}")),
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub fn as_known(&self) -> Option<&str> {
        match self {
            PlayerName::Known(name) => Some(name),
            PlayerName::Unknown => None,
        }
    }

    /// Only known names ever match.
    #[must_use]
    pub fn matches(&self, other: &str) -> bool {
        self.as_known().is_some_and(|name| name == other.trim())
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerName::Known(name) => write!(f, "{name}"),
            PlayerName::Unknown => write!(f, "{UNKNOWN_PLAYER_NAME}"),
        }
    }
}

/// One player's result in one tournament.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PlayerRound {
    pub name: PlayerName,
    pub course_name: Option<String>,
    pub position: Option<String>,
    pub strokes_under_par: Option<i32>,
    pub total_strokes: Option<i32>,
    pub round_scores: RoundScores,
    pub tee_time: Option<String>,
    pub is_amateur: Option<bool>,
    pub status: Option<String>,
    pub player_id: Option<String>,
}

impl PlayerRound {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.status.as_deref() == Some(COMPLETE_STATUS)
    }
}

/// A (player, round) pair produced by reshaping the table to long form.
#[derive(Clone, Debug, PartialEq)]
pub struct LongRow<'a> {
    pub name: &'a PlayerName,
    pub course_name: Option<&'a str>,
    pub round: Round,
    pub score: Option<i32>,
    pub total_strokes: Option<i32>,
    pub status: Option<&'a str>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RoundSummary {
    pub round: Round,
    /// `None` when no complete player recorded a score for the round.
    pub average_score: Option<f64>,
    pub leader_score: Option<i32>,
    pub trailer_score: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ComparisonRow {
    pub name: String,
    pub course: String,
    pub average_score: f64,
}

/// What the scores page renders, or returns as json.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ScoreData {
    pub tournament: Tournament,
    pub year: i32,
    pub players: Vec<PlayerRound>,
    pub round_summary: Vec<RoundSummary>,
    /// Set when the table loaded but no round summary could be computed.
    pub summary_notice: Option<String>,
    pub warnings: Vec<String>,
    pub last_refresh: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ComparisonData {
    pub year: i32,
    pub players: [String; 2],
    pub rows: Vec<ComparisonRow>,
    pub warnings: Vec<String>,
}
