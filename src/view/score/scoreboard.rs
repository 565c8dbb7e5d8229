use maud::{Markup, html};

use crate::model::{Round, ScoreData, format_optional, process_tee_time};

#[must_use]
pub fn render_scoreboard(data: &ScoreData) -> Markup {
    html! {
        @if !data.players.is_empty() {
            h3 { (data.tournament.label()) " " (data.year) }

            table class="styled-table sortable" id="leaderboard-table" {
                thead {
                    tr {
                        th { "Position" }
                        th { "Name" }
                        th { "Course Name" }
                        th { "Strokes Under" }
                        th { "Total Strokes" }
                        @for round in Round::ALL {
                            th { (round.label()) }
                        }
                        th { "Fourth Round Tee Time" }
                        th { "Amateur" }
                        th { "Status" }
                    }
                }
                tbody {
                    @for player in &data.players {
                        tr data-player-id=(player.player_id.as_deref().unwrap_or("")) {
                            td { (format_optional(player.position.as_deref())) }
                            td { (player.name.to_string()) }
                            td { (format_optional(player.course_name.as_deref())) }
                            td { (format_optional(player.strokes_under_par)) }
                            td { (format_optional(player.total_strokes)) }
                            @for (_, score) in player.round_scores.iter() {
                                td { (format_optional(score)) }
                            }
                            td { (format_optional(player.tee_time.as_deref().map(process_tee_time))) }
                            td { @if player.is_amateur == Some(true) { "Yes" } @else { "" } }
                            td { (format_optional(player.status.as_deref())) }
                        }
                    }
                }
            }
        }
        @else {
            p class="notice" { "No data available for the selected year and tournament." }
        }
    }
}
