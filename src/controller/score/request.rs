use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::LeaderboardError;
use crate::model::Tournament;

static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}$").expect("Hardcoded year pattern should always compile"));

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreRequest {
    pub tournament: Tournament,
    pub year: i32,
    pub want_json: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompareRequest {
    pub year: i32,
    pub player1: String,
    pub player2: String,
    pub want_json: bool,
}

/// # Errors
///
/// Returns `LeaderboardError::Other` with a human-readable message for a missing or malformed year
#[allow(clippy::implicit_hasher)]
pub fn parse_year(query: &HashMap<String, String>) -> Result<i32, LeaderboardError> {
    query
        .get("yr")
        .map(|s| s.trim())
        .filter(|s| YEAR_RE.is_match(s))
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| LeaderboardError::Other("yr (four digit year) parameter is required".into()))
}

#[allow(clippy::implicit_hasher)]
#[must_use]
pub fn parse_want_json(query: &HashMap<String, String>) -> bool {
    match query.get("json").map(String::as_str) {
        Some("1") => true,
        Some("0") | None => false,
        Some(other) => other.parse().unwrap_or(false),
    }
}

/// # Errors
///
/// Returns `LeaderboardError::Other` for a missing year or an unknown tournament
#[allow(clippy::implicit_hasher)]
pub fn parse_score_request(
    query: &HashMap<String, String>,
) -> Result<ScoreRequest, LeaderboardError> {
    let tournament = query
        .get("tournament")
        .and_then(|s| Tournament::from_label(s))
        .ok_or_else(|| {
            LeaderboardError::Other(format!(
                "tournament parameter must be one of: {}",
                Tournament::ALL.map(Tournament::label).join(", ")
            ))
        })?;
    let year = parse_year(query)?;
    Ok(ScoreRequest {
        tournament,
        year,
        want_json: parse_want_json(query),
    })
}

/// # Errors
///
/// Returns `LeaderboardError::Other` for a missing year or a missing player name
#[allow(clippy::implicit_hasher)]
pub fn parse_compare_request(
    query: &HashMap<String, String>,
) -> Result<CompareRequest, LeaderboardError> {
    let year = parse_year(query)?;
    let player = |key: &str| {
        query
            .get(key)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| LeaderboardError::Other(format!("{key} (player name) parameter is required")))
    };
    Ok(CompareRequest {
        year,
        player1: player("p1")?,
        player2: player("p2")?,
        want_json: parse_want_json(query),
    })
}
