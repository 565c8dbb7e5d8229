use maud::{Markup, html};

use crate::model::{ComparisonData, Round, RoundSummary, Tournament};
use crate::view::score::types::ChartSeries;
use crate::view::score::utils::{Scale, short_player_name};

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 320.0;
const PAD_LEFT: f64 = 48.0;
const PAD_RIGHT: f64 = 24.0;
const PAD_TOP: f64 = 24.0;
const PAD_BOTTOM: f64 = 40.0;

#[must_use]
pub fn render_round_summary_chart(summary: &[RoundSummary]) -> Markup {
    let x_labels: Vec<String> = Round::ALL.iter().map(|r| r.label().to_string()).collect();
    let at = |round: Round| summary.iter().find(|s| s.round == round);

    let series = vec![
        ChartSeries {
            name: "Average".to_string(),
            class: "series-average",
            points: Round::ALL
                .iter()
                .map(|&r| at(r).and_then(|s| s.average_score))
                .collect(),
        },
        ChartSeries {
            name: "Leader".to_string(),
            class: "series-leader",
            points: Round::ALL
                .iter()
                .map(|&r| at(r).and_then(|s| s.leader_score).map(f64::from))
                .collect(),
        },
        ChartSeries {
            name: "Trailer".to_string(),
            class: "series-trailer",
            points: Round::ALL
                .iter()
                .map(|&r| at(r).and_then(|s| s.trailer_score).map(f64::from))
                .collect(),
        },
    ];

    render_line_chart("Scores by Round", &x_labels, &series)
}

/// One line per player across the tournaments either of them played, in display order.
#[must_use]
pub fn render_comparison_chart(data: &ComparisonData) -> Markup {
    let mut courses: Vec<&str> = Vec::new();
    for t in Tournament::ALL {
        if data.rows.iter().any(|r| r.course == t.label()) {
            courses.push(t.label());
        }
    }
    for row in &data.rows {
        if !courses.contains(&row.course.as_str()) {
            courses.push(&row.course);
        }
    }

    let classes = ["series-player1", "series-player2"];
    let series: Vec<ChartSeries> = data
        .players
        .iter()
        .zip(classes)
        .map(|(player, class)| ChartSeries {
            name: short_player_name(player),
            class,
            points: courses
                .iter()
                .map(|course| {
                    data.rows
                        .iter()
                        .find(|r| &r.name == player && r.course == *course)
                        .map(|r| r.average_score)
                })
                .collect(),
        })
        .collect();

    let x_labels: Vec<String> = courses.iter().map(|c| (*c).to_string()).collect();
    render_line_chart("Average Score by Tournament", &x_labels, &series)
}

fn render_line_chart(title: &str, x_labels: &[String], series: &[ChartSeries]) -> Markup {
    let all_points = series.iter().flat_map(|s| s.points.iter().flatten().copied());
    let Some(y_scale) = Scale::fit(all_points, HEIGHT - PAD_BOTTOM, PAD_TOP) else {
        return html! {};
    };

    let step = if x_labels.len() > 1 {
        (WIDTH - PAD_LEFT - PAD_RIGHT) / (x_labels.len() - 1) as f64
    } else {
        0.0
    };
    let x_at = |idx: usize| {
        if x_labels.len() > 1 {
            PAD_LEFT + step * idx as f64
        } else {
            (PAD_LEFT + WIDTH - PAD_RIGHT) / 2.0
        }
    };
    let ticks = y_ticks(y_scale.data_min, y_scale.data_max);

    html! {
        h3 class="chart-title" { (title) }
        svg class="line-chart" viewBox=(format!("0 0 {WIDTH} {HEIGHT}")) role="img" {
            @for tick in &ticks {
                @let y = y_scale.map(f64::from(*tick));
                line class="gridline" x1=(PAD_LEFT) x2=(WIDTH - PAD_RIGHT) y1=(y) y2=(y) {}
                text class="axis-label" x=(PAD_LEFT - 8.0) y=(y + 4.0) text-anchor="end" { (tick) }
            }
            @for (idx, label) in x_labels.iter().enumerate() {
                text class="axis-label" x=(x_at(idx)) y=(HEIGHT - PAD_BOTTOM + 20.0) text-anchor="middle" { (label) }
            }
            @for s in series {
                @for segment in segments(&s.points) {
                    @if segment.len() > 1 {
                        polyline class=(format!("series {}", s.class)) fill="none"
                            points=(segment.iter().map(|(i, v)| format!("{:.1},{:.1}", x_at(*i), y_scale.map(*v))).collect::<Vec<_>>().join(" ")) {}
                    }
                }
                @for (idx, point) in s.points.iter().enumerate() {
                    @if let Some(v) = point {
                        circle class=(format!("point {}", s.class)) cx=(format!("{:.1}", x_at(idx))) cy=(format!("{:.1}", y_scale.map(*v))) r="4" {
                            title { (s.name) ": " (format!("{v:.2}")) }
                        }
                    }
                }
            }
        }
        ul class="chart-legend" {
            @for s in series {
                li class=(s.class) { (s.name) }
            }
        }
    }
}

/// Splits a series at its gaps so unplayed points are never bridged.
fn segments(points: &[Option<f64>]) -> Vec<Vec<(usize, f64)>> {
    let mut out: Vec<Vec<(usize, f64)>> = vec![Vec::new()];
    for (idx, point) in points.iter().enumerate() {
        match point {
            Some(v) => {
                if let Some(last) = out.last_mut() {
                    last.push((idx, *v));
                }
            }
            None => {
                if out.last().is_some_and(|seg| !seg.is_empty()) {
                    out.push(Vec::new());
                }
            }
        }
    }
    out.retain(|seg| !seg.is_empty());
    out
}

/// Whole-stroke ticks across the range, at most about six of them.
fn y_ticks(min: f64, max: f64) -> Vec<i32> {
    #[allow(clippy::cast_possible_truncation)]
    let (lo, hi) = (min.ceil() as i32, max.floor() as i32);
    if hi < lo {
        return vec![];
    }
    let step = ((hi - lo) / 5).max(1);
    (lo..=hi).step_by(usize::try_from(step).unwrap_or(1)).collect()
}
