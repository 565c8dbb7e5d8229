mod common;

use common::{complete, player};
use rusty_golf_charts::controller::leaderboard::normalize_response;
use rusty_golf_charts::controller::score::round_summary;
use rusty_golf_charts::error::LeaderboardError;
use rusty_golf_charts::model::Round;

const AUGUSTA: &str = "Augusta National Golf Club";

#[test]
fn test_round_summary_from_fixture() -> Result<(), Box<dyn std::error::Error>> {
    let body = serde_json::from_str(include_str!("test1_leaderboard.json"))?;
    let players = normalize_response(&body);
    let summary = round_summary(&players)?;

    assert_eq!(summary.len(), 4);
    let rounds: Vec<Round> = summary.iter().map(|s| s.round).collect();
    assert_eq!(rounds, Round::ALL.to_vec());

    // cut and withdrawn rows are left out of the averages
    let averages: Vec<Option<f64>> = summary.iter().map(|s| s.average_score).collect();
    assert_eq!(averages, vec![Some(71.0), Some(71.25), Some(73.75), Some(71.5)]);

    // leader is Scheffler at 277, trailer Woods at 304
    let leader: Vec<Option<i32>> = summary.iter().map(|s| s.leader_score).collect();
    let trailer: Vec<Option<i32>> = summary.iter().map(|s| s.trailer_score).collect();
    assert_eq!(leader, vec![Some(66), Some(72), Some(71), Some(68)]);
    assert_eq!(trailer, vec![Some(73), Some(72), Some(82), Some(77)]);
    Ok(())
}

#[test]
fn test_only_complete_players_averaged() -> Result<(), Box<dyn std::error::Error>> {
    let table = vec![
        complete("A One", AUGUSTA, 70),
        complete("B Two", AUGUSTA, 72),
        complete("C Three", AUGUSTA, 74),
        player("D Four", AUGUSTA, [Some(68), None, None, None], Some(68), "cut"),
    ];
    let summary = round_summary(&table)?;
    assert_eq!(summary[0].average_score, Some(72.0));
    assert_eq!(summary[0].leader_score, Some(70));
    assert_eq!(summary[0].trailer_score, Some(74));

    // changing a non-complete player's score leaves the averages alone
    let mut changed = table.clone();
    changed[3].round_scores.set(Round::First, Some(99));
    let again = round_summary(&changed)?;
    assert_eq!(
        summary.iter().map(|s| s.average_score).collect::<Vec<_>>(),
        again.iter().map(|s| s.average_score).collect::<Vec<_>>()
    );
    Ok(())
}

#[test]
fn test_missing_rounds_average_over_present_scores() -> Result<(), Box<dyn std::error::Error>> {
    let table = vec![
        player("A One", AUGUSTA, [Some(70), Some(70), None, None], Some(140), "complete"),
        player("B Two", AUGUSTA, [Some(74), Some(72), Some(71), None], Some(217), "complete"),
    ];
    let summary = round_summary(&table)?;
    assert_eq!(summary[0].average_score, Some(72.0));
    assert_eq!(summary[1].average_score, Some(71.0));
    assert_eq!(summary[2].average_score, Some(71.0));
    assert_eq!(summary[3].average_score, None);
    assert_eq!(summary[2].leader_score, None);
    assert_eq!(summary[2].trailer_score, Some(71));
    Ok(())
}

#[test]
fn test_ties_keep_first_player() -> Result<(), Box<dyn std::error::Error>> {
    let table = vec![
        player("A One", AUGUSTA, [Some(70), Some(71), Some(72), Some(73)], Some(286), "complete"),
        player("B Two", AUGUSTA, [Some(73), Some(72), Some(71), Some(70)], Some(286), "complete"),
    ];
    let summary = round_summary(&table)?;
    assert_eq!(summary[0].leader_score, Some(70));
    assert_eq!(summary[0].trailer_score, Some(70));
    assert_eq!(summary[3].trailer_score, Some(73));
    Ok(())
}

#[test]
fn test_round_summary_errors() {
    assert_eq!(round_summary(&[]), Err(LeaderboardError::EmptyDataset));

    let no_complete = vec![player("A One", AUGUSTA, [Some(70), None, None, None], Some(70), "active")];
    assert_eq!(round_summary(&no_complete), Err(LeaderboardError::NoEligiblePlayers));

    let no_total = vec![player("A One", AUGUSTA, [Some(70); 4], None, "complete")];
    assert_eq!(round_summary(&no_total), Err(LeaderboardError::NoEligiblePlayers));
}
