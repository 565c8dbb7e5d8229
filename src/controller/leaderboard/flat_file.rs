use async_trait::async_trait;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use super::client::LeaderboardSource;
use super::processing::dedupe_player_ids;
use crate::error::LeaderboardError;
use crate::model::{PlayerName, PlayerRound, Round, RoundScores, Tournament};

/// A row of a pre-exported scoreboard file, one column per flattened field.
#[derive(Debug, Deserialize)]
struct FlatRecord {
    #[serde(rename = "Name")]
    name: Option<String>,
    #[serde(rename = "Course Name")]
    course_name: Option<String>,
    #[serde(rename = "Position")]
    position: Option<String>,
    #[serde(rename = "Strokes Under")]
    strokes_under: Option<String>,
    #[serde(rename = "Total Strokes")]
    total_strokes: Option<String>,
    #[serde(rename = "First Round")]
    first_round: Option<String>,
    #[serde(rename = "Second Round")]
    second_round: Option<String>,
    #[serde(rename = "Third Round")]
    third_round: Option<String>,
    #[serde(rename = "Fourth Round")]
    fourth_round: Option<String>,
    #[serde(rename = "Fourth Round Tee Time")]
    tee_time: Option<String>,
    #[serde(rename = "Amateur Status")]
    amateur_status: Option<String>,
    #[serde(rename = "Tournament Status")]
    status: Option<String>,
    #[serde(rename = "ID")]
    id: Option<String>,
}

/// Scoreboard loaded once from a flat file and served in place of the live endpoint.
#[derive(Debug, Clone)]
pub struct FlatFileSource {
    players: Vec<PlayerRound>,
}

impl FlatFileSource {
    /// # Errors
    ///
    /// Will return `Err` if the file cannot be opened or a row does not parse
    pub fn open(path: &Path) -> Result<Self, LeaderboardError> {
        let file = std::fs::File::open(path)?;
        let source = Self::from_reader(file)?;
        info!(
            "Loaded {} scoreboard rows from {}",
            source.players.len(),
            path.display()
        );
        Ok(source)
    }

    /// # Errors
    ///
    /// Will return `Err` if a row does not parse
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LeaderboardError> {
        let mut rdr = csv::Reader::from_reader(reader);
        let mut players = Vec::new();
        for record in rdr.deserialize::<FlatRecord>() {
            players.push(flat_record_to_player(record?));
        }
        Ok(Self { players })
    }

    #[must_use]
    pub fn players(&self) -> &[PlayerRound] {
        &self.players
    }
}

#[async_trait]
impl LeaderboardSource for FlatFileSource {
    async fn load_table(
        &self,
        tournament: Tournament,
        year: i32,
    ) -> Result<Vec<PlayerRound>, LeaderboardError> {
        debug!("Flat file carries no year, serving {tournament} rows for {year}");
        let rows = self
            .players
            .iter()
            .filter(|p| {
                p.course_name
                    .as_deref()
                    .and_then(Tournament::from_venue)
                    .is_some_and(|t| t == tournament)
            })
            .cloned()
            .collect();
        Ok(dedupe_player_ids(rows))
    }
}

fn flat_record_to_player(record: FlatRecord) -> PlayerRound {
    let mut round_scores = RoundScores::default();
    let columns = [
        &record.first_round,
        &record.second_round,
        &record.third_round,
        &record.fourth_round,
    ];
    for (round, column) in Round::ALL.into_iter().zip(columns) {
        round_scores.set(round, column.as_deref().and_then(parse_flat_int));
    }

    PlayerRound {
        name: parse_flat_name(record.name.as_deref()),
        course_name: non_empty(record.course_name),
        position: non_empty(record.position),
        strokes_under_par: record.strokes_under.as_deref().and_then(|s| {
            if s.trim().eq_ignore_ascii_case("E") {
                Some(0)
            } else {
                parse_flat_int(s)
            }
        }),
        total_strokes: record.total_strokes.as_deref().and_then(parse_flat_int),
        round_scores,
        tee_time: non_empty(record.tee_time),
        is_amateur: record
            .amateur_status
            .as_deref()
            .and_then(|s| s.trim().to_ascii_lowercase().parse::<bool>().ok()),
        status: non_empty(record.status),
        player_id: non_empty(record.id).map(|id| {
            parse_flat_int(&id).map_or(id, |numeric| numeric.to_string())
        }),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty() && s != "None" && s != "nan")
}

/// Exported integer columns holding gaps are written as floats ("70.0").
fn parse_flat_int(value: &str) -> Option<i32> {
    let value = value.trim().trim_start_matches('+');
    if let Ok(v) = value.parse::<i32>() {
        return Some(v);
    }
    let v = value.parse::<f64>().ok()?;
    if v.is_finite() && v.fract() == 0.0 && v.abs() <= f64::from(i32::MAX) {
        Some(v as i32)
    } else {
        None
    }
}

/// Exports written from rows missing a name part carry a literal "None" token.
fn parse_flat_name(value: Option<&str>) -> PlayerName {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return PlayerName::Unknown;
    };
    if value.split_whitespace().any(|part| part == "None") {
        PlayerName::Unknown
    } else {
        PlayerName::Known(value.to_string())
    }
}
