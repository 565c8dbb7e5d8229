use ahash::RandomState;
use serde_json::Value;
use std::collections::HashSet;
use tracing::{debug, warn};

use crate::model::{PlayerName, PlayerRound, Round, RoundScores};

/// Flattens the `leaderboardRows` array of an upstream response body.
#[must_use]
pub fn normalize_response(body: &Value) -> Vec<PlayerRound> {
    let empty_vec: Vec<Value> = Vec::new();
    let rows = body
        .get("leaderboardRows")
        .and_then(Value::as_array)
        .unwrap_or(&empty_vec);
    normalize(rows)
}

/// Turns raw per-player leaderboard records into one flat row per player.
///
/// Rounds past the fourth are ignored, missing rounds stay `None`, and a record
/// repeating an already seen `playerId` is dropped.
#[must_use]
pub fn normalize(records: &[Value]) -> Vec<PlayerRound> {
    let players = records
        .iter()
        .map(normalize_record)
        .inspect(|player| {
            if player.name.as_known().is_none() {
                debug!(
                    "Leaderboard row without a full name, player id {:?}",
                    player.player_id
                );
            }
        })
        .collect();
    dedupe_player_ids(players)
}

/// Keeps the first row for each `player_id`; rows without an id are always kept.
#[must_use]
pub fn dedupe_player_ids(players: Vec<PlayerRound>) -> Vec<PlayerRound> {
    let mut seen_ids: HashSet<String, RandomState> = HashSet::default();
    players
        .into_iter()
        .filter(|player| match &player.player_id {
            Some(id) if !seen_ids.insert(id.clone()) => {
                warn!("Skipping duplicate leaderboard row for player id {id}");
                false
            }
            _ => true,
        })
        .collect()
}

fn normalize_record(record: &Value) -> PlayerRound {
    let empty_vec: Vec<Value> = Vec::new();
    let rounds = record
        .get("rounds")
        .and_then(Value::as_array)
        .unwrap_or(&empty_vec);

    let mut round_scores = RoundScores::default();
    for (idx, round) in rounds.iter().enumerate() {
        let Some(which) = Round::from_index(idx) else {
            break;
        };
        round_scores.set(which, round.get("strokes").and_then(json_int));
    }

    let course_name = rounds
        .first()
        .and_then(|r| r.get("courseName"))
        .and_then(json_string);

    PlayerRound {
        name: PlayerName::from_parts(
            record.get("firstName").and_then(Value::as_str),
            record.get("lastName").and_then(Value::as_str),
        ),
        course_name,
        position: record.get("position").and_then(json_string),
        strokes_under_par: record.get("total").and_then(json_to_par),
        total_strokes: record
            .get("totalStrokesFromCompletedRounds")
            .and_then(json_int),
        round_scores,
        tee_time: record.get("teeTime").and_then(json_string),
        is_amateur: record.get("isAmateur").and_then(json_bool),
        status: record.get("status").and_then(json_string),
        player_id: record.get("playerId").and_then(json_string),
    }
}

/// Reads an integer that may be a json number, a numeric string, or an
/// extended-json wrapper such as `{"$numberInt": "70"}`.
#[must_use]
pub fn json_int(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n.as_i64().and_then(|v| i32::try_from(v).ok()),
        Value::String(s) => s.trim().trim_start_matches('+').parse::<i32>().ok(),
        Value::Object(map) => map
            .get("$numberInt")
            .or_else(|| map.get("$numberLong"))
            .and_then(json_int),
        _ => None,
    }
}

/// Like [`json_int`], but "E" (even par) reads as zero.
#[must_use]
pub fn json_to_par(value: &Value) -> Option<i32> {
    match value.as_str().map(str::trim) {
        Some(s) if s.eq_ignore_ascii_case("E") => Some(0),
        _ => json_int(value),
    }
}

#[must_use]
pub fn json_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Object(_) => json_int(value).map(|v| v.to_string()),
        _ => None,
    }
}

#[must_use]
pub fn json_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => s.trim().parse::<bool>().ok(),
        Value::Number(n) => n.as_i64().map(|v| v != 0),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ints_come_in_three_shapes() {
        assert_eq!(json_int(&json!(70)), Some(70));
        assert_eq!(json_int(&json!("71")), Some(71));
        assert_eq!(json_int(&json!({"$numberInt": "72"})), Some(72));
        assert_eq!(json_int(&json!("-")), None);
        assert_eq!(json_int(&Value::Null), None);
    }

    #[test]
    fn even_par_reads_as_zero() {
        assert_eq!(json_to_par(&json!("E")), Some(0));
        assert_eq!(json_to_par(&json!("-11")), Some(-11));
        assert_eq!(json_to_par(&json!("+3")), Some(3));
    }

    #[test]
    fn rounds_past_four_are_ignored() {
        let record = json!({
            "firstName": "Scottie",
            "lastName": "Scheffler",
            "playerId": "46046",
            "rounds": [
                {"strokes": 66, "courseName": "Augusta National Golf Club"},
                {"strokes": 72},
                {"strokes": 71},
                {"strokes": 68},
                {"strokes": 70}
            ]
        });
        let players = normalize(&[record]);
        assert_eq!(
            players[0].round_scores,
            RoundScores::new([Some(66), Some(72), Some(71), Some(68)])
        );
    }
}
