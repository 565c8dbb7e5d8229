use maud::{Markup, html};

use crate::HTMX_PATH;
use crate::model::Tournament;

pub const TITLE: &str = "Charting the Course";

#[must_use]
pub fn render_index_template(default_year: i32) -> Markup {
    html! {
        (maud::DOCTYPE)
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            link rel="stylesheet" type="text/css" href="static/styles.css";
            title { (TITLE) }
            script src=(HTMX_PATH) defer {}
            script src="static/tabs.js" defer {}
        }
        body {
            h1 { (TITLE) }
            div class="tab-bar" {
                button class="tab-button selected" data-tab="years" { "Years" }
                button class="tab-button" data-tab="players" { "Players" }
            }

            div class="tab visible" data-tab="years" {
                form hx-get="scores" hx-target="#scores" hx-indicator="#scores-loading" {
                    label for="year-input" { "Enter a Year:" }
                    input id="year-input" type="text" name="yr" value=(default_year) pattern="\\d{4}" required;
                    label for="tournament-select" { "Select a Tournament" }
                    select id="tournament-select" name="tournament" {
                        @for t in Tournament::ALL {
                            option value=(t.label()) { (t.label()) }
                        }
                    }
                    button type="submit" { "Show" }
                }
                img id="scores-loading" alt="Result loading..." class="htmx-indicator" width="150" src="https://htmx.org//img/bars.svg" {}
                div id="scores" {}
            }

            div class="tab hidden" data-tab="players" {
                form hx-get="compare" hx-target="#comparison-result" hx-indicator="#compare-loading" {
                    label for="compare-year" { "Enter a Year:" }
                    input id="compare-year" type="text" name="yr" value=(default_year) pattern="\\d{4}" required
                        hx-get="players" hx-target="#player-names" hx-trigger="load, change";
                    label for="p1" { "First Player" }
                    input id="p1" type="text" name="p1" list="player-names" required;
                    label for="p2" { "Second Player" }
                    input id="p2" type="text" name="p2" list="player-names" required;
                    datalist id="player-names" {}
                    button type="submit" { "Compare" }
                }
                img id="compare-loading" alt="Result loading..." class="htmx-indicator" width="150" src="https://htmx.org//img/bars.svg" {}
                div id="comparison-result" {}
            }
        }
    }
}
