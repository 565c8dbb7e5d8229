use tracing::{info, warn};

use super::score_aggregators::{compare_players, round_summary};
use crate::controller::leaderboard::LeaderboardSource;
use crate::error::LeaderboardError;
use crate::model::{ComparisonData, PlayerRound, ScoreData, Tournament, format_refresh_time};

/// A freshly loaded table plus anything the user should be warned about.
#[derive(Debug, Clone, Default)]
pub struct LoadedTable {
    pub players: Vec<PlayerRound>,
    pub warnings: Vec<String>,
}

/// Loads one tournament-year. Upstream failures become a warning and an empty table.
///
/// # Errors
///
/// Will return `Err` for failures other than the upstream fetch, e.g. a malformed body
pub async fn load_tournament_table(
    source: &dyn LeaderboardSource,
    tournament: Tournament,
    year: i32,
) -> Result<LoadedTable, LeaderboardError> {
    match source.load_table(tournament, year).await {
        Ok(players) => {
            info!("Loaded {} players for {tournament} {year}", players.len());
            Ok(LoadedTable {
                players,
                warnings: vec![],
            })
        }
        Err(LeaderboardError::UpstreamFetchFailure(msg)) => {
            warn!("{tournament} {year}: {msg}");
            Ok(LoadedTable {
                players: vec![],
                warnings: vec![msg],
            })
        }
        Err(e) => Err(e),
    }
}

/// Loads every known major for a year, one after another, and concatenates them.
///
/// # Errors
///
/// Will return `Err` for failures other than the upstream fetch
pub async fn load_season_table(
    source: &dyn LeaderboardSource,
    year: i32,
) -> Result<LoadedTable, LeaderboardError> {
    let mut season = LoadedTable::default();
    for tournament in Tournament::ALL {
        let loaded = load_tournament_table(source, tournament, year).await?;
        season.players.extend(loaded.players);
        season
            .warnings
            .extend(loaded.warnings.into_iter().map(|w| format!("{tournament}: {w}")));
    }
    Ok(season)
}

/// # Errors
///
/// Will return `Err` if loading fails for reasons other than the upstream fetch
pub async fn get_data_for_scores_page(
    source: &dyn LeaderboardSource,
    tournament: Tournament,
    year: i32,
) -> Result<ScoreData, LeaderboardError> {
    let loaded = load_tournament_table(source, tournament, year).await?;
    if loaded.players.is_empty() {
        return Ok(ScoreData {
            tournament,
            year,
            players: vec![],
            round_summary: vec![],
            summary_notice: None,
            warnings: loaded.warnings,
            last_refresh: format_refresh_time(chrono::Utc::now()),
        });
    }

    let (summary, summary_notice) = match round_summary(&loaded.players) {
        Ok(summary) => (summary, None),
        Err(LeaderboardError::NoEligiblePlayers) => (
            vec![],
            Some(
                "No player has completed this tournament yet, so there is no round summary."
                    .to_string(),
            ),
        ),
        Err(e) => return Err(e),
    };

    Ok(ScoreData {
        tournament,
        year,
        players: loaded.players,
        round_summary: summary,
        summary_notice,
        warnings: loaded.warnings,
        last_refresh: format_refresh_time(chrono::Utc::now()),
    })
}

/// # Errors
///
/// `EmptyDataset` when no tournament of the year returned data, `PlayerNotFound`
/// when either name is absent
pub async fn get_data_for_compare_page(
    source: &dyn LeaderboardSource,
    year: i32,
    name1: &str,
    name2: &str,
) -> Result<ComparisonData, LeaderboardError> {
    let loaded = load_season_table(source, year).await?;
    let rows = compare_players(&loaded.players, name1, name2)?;
    Ok(ComparisonData {
        year,
        players: [name1.trim().to_string(), name2.trim().to_string()],
        rows,
        warnings: loaded.warnings,
    })
}
