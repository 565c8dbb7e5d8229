use ahash::RandomState;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::error::LeaderboardError;
use crate::model::{
    COMPLETE_STATUS, ComparisonRow, LongRow, PlayerRound, Round, RoundSummary, Tournament,
    venue_label,
};

/// Reshapes the table to one row per (player, round), carrying total strokes and
/// status along so later filters can use them.
#[must_use]
pub fn melt(table: &[PlayerRound]) -> Vec<LongRow<'_>> {
    table
        .iter()
        .flat_map(|player| {
            player.round_scores.iter().map(move |(round, score)| LongRow {
                name: &player.name,
                course_name: player.course_name.as_deref(),
                round,
                score,
                total_strokes: player.total_strokes,
                status: player.status.as_deref(),
            })
        })
        .collect()
}

/// Returns a copy of the table with known venues replaced by their tournament label.
#[must_use]
pub fn apply_venue_labels(table: &[PlayerRound]) -> Vec<PlayerRound> {
    table
        .iter()
        .map(|player| PlayerRound {
            course_name: player
                .course_name
                .as_deref()
                .map(|course| venue_label(course).to_string()),
            ..player.clone()
        })
        .collect()
}

/// Distinct known player names, sorted.
#[must_use]
pub fn player_names(table: &[PlayerRound]) -> Vec<String> {
    table
        .iter()
        .filter_map(|p| p.name.as_known())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Per-round average over complete players, alongside the per-round scores of the
/// lowest and highest total among them.
///
/// # Errors
///
/// `EmptyDataset` for an empty table, `NoEligiblePlayers` when no complete player
/// has a recorded total.
pub fn round_summary(table: &[PlayerRound]) -> Result<Vec<RoundSummary>, LeaderboardError> {
    if table.is_empty() {
        return Err(LeaderboardError::EmptyDataset);
    }

    let mut sums: BTreeMap<Round, (i64, u32)> = Round::ALL.iter().map(|&r| (r, (0, 0))).collect();
    for row in melt(table)
        .iter()
        .filter(|row| row.status == Some(COMPLETE_STATUS))
    {
        if let Some(score) = row.score {
            let entry = sums.entry(row.round).or_default();
            entry.0 += i64::from(score);
            entry.1 += 1;
        }
    }

    let complete = || table.iter().filter(|p| p.is_complete());
    let leader = first_extreme(complete(), |candidate, best| candidate < best)
        .ok_or(LeaderboardError::NoEligiblePlayers)?;
    let trailer = first_extreme(complete(), |candidate, best| candidate > best)
        .ok_or(LeaderboardError::NoEligiblePlayers)?;

    Ok(sums
        .into_iter()
        .map(|(round, (sum, count))| RoundSummary {
            round,
            average_score: mean(sum, count),
            leader_score: leader.round_scores.get(round),
            trailer_score: trailer.round_scores.get(round),
        })
        .collect())
}

/// Average score per (player, tournament) for two players.
///
/// # Errors
///
/// `EmptyDataset` for an empty table, `PlayerNotFound` listing every requested name
/// that matches no row.
pub fn compare_players(
    table: &[PlayerRound],
    name1: &str,
    name2: &str,
) -> Result<Vec<ComparisonRow>, LeaderboardError> {
    if table.is_empty() {
        return Err(LeaderboardError::EmptyDataset);
    }

    let mut requested: Vec<&str> = vec![name1.trim()];
    if name2.trim() != name1.trim() {
        requested.push(name2.trim());
    }

    let missing: Vec<String> = requested
        .iter()
        .filter(|name| !table.iter().any(|p| p.name.matches(name)))
        .map(|name| (*name).to_string())
        .collect();
    if !missing.is_empty() {
        return Err(LeaderboardError::PlayerNotFound(missing));
    }

    let labelled = apply_venue_labels(table);
    let mut grouped: HashMap<(usize, &str), (i64, u32), RandomState> = HashMap::default();
    for row in melt(&labelled) {
        let Some(player_idx) = requested.iter().position(|name| row.name.matches(name)) else {
            continue;
        };
        let (Some(course), Some(score)) = (row.course_name, row.score) else {
            continue;
        };
        let entry = grouped.entry((player_idx, course)).or_default();
        entry.0 += i64::from(score);
        entry.1 += 1;
    }

    let mut rows: Vec<(usize, &str, f64)> = grouped
        .into_iter()
        .filter_map(|((player_idx, course), (sum, count))| {
            mean(sum, count).map(|avg| (player_idx, course, avg))
        })
        .collect();
    rows.sort_by(|a, b| {
        a.0.cmp(&b.0)
            .then_with(|| course_order(a.1).cmp(&course_order(b.1)))
    });

    Ok(rows
        .into_iter()
        .map(|(player_idx, course, average_score)| ComparisonRow {
            name: requested[player_idx].to_string(),
            course: course.to_string(),
            average_score,
        })
        .collect())
}

/// Canonical tournament order first, then anything unrecognised alphabetically.
fn course_order(course: &str) -> (usize, &str) {
    match Tournament::from_label(course) {
        Some(t) => (t.display_rank(), ""),
        None => (Tournament::ALL.len(), course),
    }
}

/// First player whose total beats every earlier one; later ties never replace it.
fn first_extreme<'a>(
    players: impl Iterator<Item = &'a PlayerRound>,
    beats: impl Fn(i32, i32) -> bool,
) -> Option<&'a PlayerRound> {
    let mut best: Option<(&PlayerRound, i32)> = None;
    for player in players {
        let Some(total) = player.total_strokes else {
            continue;
        };
        match best {
            Some((_, best_total)) if !beats(total, best_total) => {}
            _ => best = Some((player, total)),
        }
    }
    best.map(|(player, _)| player)
}

fn mean(sum: i64, count: u32) -> Option<f64> {
    if count == 0 {
        None
    } else {
        #[allow(clippy::cast_precision_loss)]
        let sum = sum as f64;
        Some(sum / f64::from(count))
    }
}
