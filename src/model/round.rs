use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four scheduled competition days, in play order.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Round {
    First,
    Second,
    Third,
    Fourth,
}

impl Round {
    pub const ALL: [Round; 4] = [Round::First, Round::Second, Round::Third, Round::Fourth];

    /// Zero-based position in a player's round list.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Round::First => 0,
            Round::Second => 1,
            Round::Third => 2,
            Round::Fourth => 3,
        }
    }

    #[must_use]
    pub fn from_index(idx: usize) -> Option<Self> {
        Self::ALL.get(idx).copied()
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Round::First => "First Round",
            Round::Second => "Second Round",
            Round::Third => "Third Round",
            Round::Fourth => "Fourth Round",
        }
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Fixed four-slot score card. A round that was never played stays `None`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoundScores([Option<i32>; 4]);

impl RoundScores {
    #[must_use]
    pub fn new(scores: [Option<i32>; 4]) -> Self {
        Self(scores)
    }

    #[must_use]
    pub fn get(&self, round: Round) -> Option<i32> {
        self.0[round.index()]
    }

    pub fn set(&mut self, round: Round, score: Option<i32>) {
        self.0[round.index()] = score;
    }

    #[must_use]
    pub fn first(&self) -> Option<i32> {
        self.get(Round::First)
    }

    #[must_use]
    pub fn second(&self) -> Option<i32> {
        self.get(Round::Second)
    }

    #[must_use]
    pub fn third(&self) -> Option<i32> {
        self.get(Round::Third)
    }

    #[must_use]
    pub fn fourth(&self) -> Option<i32> {
        self.get(Round::Fourth)
    }

    /// Pairs every round with its score, played or not.
    pub fn iter(&self) -> impl Iterator<Item = (Round, Option<i32>)> + '_ {
        Round::ALL.iter().map(|&round| (round, self.get(round)))
    }

    #[must_use]
    pub fn rounds_played(&self) -> usize {
        self.0.iter().filter(|s| s.is_some()).count()
    }
}
