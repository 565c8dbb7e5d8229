use maud::{Markup, html};

use crate::model::{ComparisonData, RoundSummary, format_average, format_optional};

#[must_use]
pub fn render_round_summary(summary: &[RoundSummary]) -> Markup {
    html! {
        h3 { "Summary Scores by Round" }
        table class="styled-table" id="round-summary-table" {
            thead {
                tr {
                    th { "Round" }
                    th { "Average (complete players)" }
                    th { "Leader" }
                    th { "Trailer" }
                }
            }
            tbody {
                @for row in summary {
                    tr {
                        td { (row.round.label()) }
                        td { (format_average(row.average_score)) }
                        td { (format_optional(row.leader_score)) }
                        td { (format_optional(row.trailer_score)) }
                    }
                }
            }
        }
    }
}

#[must_use]
pub fn render_comparison_table(data: &ComparisonData) -> Markup {
    html! {
        h3 { (data.players[0]) " vs " (data.players[1]) ", " (data.year) }
        @if data.rows.is_empty() {
            p class="notice" { "Neither player has a recorded round in these tournaments." }
        } @else {
            table class="styled-table" id="comparison-table" {
                thead {
                    tr {
                        th { "Name" }
                        th { "Tournament" }
                        th { "Average Score" }
                    }
                }
                tbody {
                    @for row in &data.rows {
                        tr {
                            td { (row.name) }
                            td { (row.course) }
                            td { (format_average(Some(row.average_score))) }
                        }
                    }
                }
            }
        }
    }
}
