#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;

use rusty_golf_charts::controller::leaderboard::LeaderboardSource;
use rusty_golf_charts::error::LeaderboardError;
use rusty_golf_charts::model::{PlayerName, PlayerRound, RoundScores, Tournament};

pub fn player(
    name: &str,
    course: &str,
    rounds: [Option<i32>; 4],
    total: Option<i32>,
    status: &str,
) -> PlayerRound {
    PlayerRound {
        name: PlayerName::Known(name.to_string()),
        course_name: Some(course.to_string()),
        position: None,
        strokes_under_par: None,
        total_strokes: total,
        round_scores: RoundScores::new(rounds),
        tee_time: None,
        is_amateur: Some(false),
        status: Some(status.to_string()),
        player_id: None,
    }
}

/// Four equal rounds, total is their sum.
pub fn complete(name: &str, course: &str, score: i32) -> PlayerRound {
    player(
        name,
        course,
        [Some(score); 4],
        Some(score * 4),
        "complete",
    )
}

/// In-memory source; tournaments without an entry come back empty, `failing` ones
/// fail the way an unreachable upstream would.
#[derive(Default)]
pub struct StubSource {
    pub tables: HashMap<Tournament, Vec<PlayerRound>>,
    pub failing: Vec<Tournament>,
}

impl StubSource {
    pub fn with(mut self, tournament: Tournament, players: Vec<PlayerRound>) -> Self {
        self.tables.insert(tournament, players);
        self
    }

    pub fn failing(mut self, tournament: Tournament) -> Self {
        self.failing.push(tournament);
        self
    }
}

#[async_trait]
impl LeaderboardSource for StubSource {
    async fn load_table(
        &self,
        tournament: Tournament,
        _year: i32,
    ) -> Result<Vec<PlayerRound>, LeaderboardError> {
        if self.failing.contains(&tournament) {
            return Err(LeaderboardError::UpstreamFetchFailure(
                "Failed to fetch data: 503".to_string(),
            ));
        }
        Ok(self.tables.get(&tournament).cloned().unwrap_or_default())
    }
}
