use maud::{Markup, html};

use crate::model::{ComparisonData, ScoreData};
use crate::view::score::{
    render_comparison_chart, render_comparison_table, render_round_summary,
    render_round_summary_chart, render_scoreboard,
};

#[must_use]
pub fn render_warnings(warnings: &[String]) -> Markup {
    html! {
        @for warning in warnings {
            p class="warning" { (warning) }
        }
    }
}

#[must_use]
pub fn render_notice(message: &str) -> Markup {
    html! {
        p class="notice" { (message) }
    }
}

#[must_use]
pub fn render_scores_template(data: &ScoreData) -> Markup {
    html! {
        (render_warnings(&data.warnings))
        (render_scoreboard(data))
        @if let Some(notice) = &data.summary_notice {
            (render_notice(notice))
        }
        @if !data.round_summary.is_empty() {
            div id="score-summary" {
                (render_round_summary(&data.round_summary))
            }
            div id="score-chart" {
                (render_round_summary_chart(&data.round_summary))
            }
        }
        p class="refresh" { "Last refreshed " (data.last_refresh) }
    }
}

#[must_use]
pub fn render_compare_template(data: &ComparisonData) -> Markup {
    html! {
        (render_warnings(&data.warnings))
        div id="comparison" {
            (render_comparison_table(data))
        }
        @if !data.rows.is_empty() {
            div id="comparison-chart" {
                (render_comparison_chart(data))
            }
        }
    }
}

/// `<option>` list feeding the player selectors.
#[must_use]
pub fn render_player_options(names: &[String]) -> Markup {
    html! {
        @for name in names {
            option value=(name) { (name) }
        }
    }
}
