use actix_web::http::StatusCode;
use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use chrono::Datelike;
use serde_json::json;
use std::collections::HashMap;
use tracing::warn;

use super::data_service::{get_data_for_compare_page, get_data_for_scores_page, load_season_table};
use super::request::{parse_compare_request, parse_score_request, parse_want_json, parse_year};
use super::score_aggregators::player_names;
use crate::controller::leaderboard::LeaderboardSource;
use crate::error::LeaderboardError;
use crate::view::index::render_index_template;
use crate::view::score::{
    render_compare_template, render_notice, render_player_options, render_scores_template,
};

pub async fn index() -> impl Responder {
    let markup = render_index_template(chrono::Utc::now().year());
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}

pub async fn scores(
    query: web::Query<HashMap<String, String>>,
    source: Data<dyn LeaderboardSource>,
) -> impl Responder {
    let request = match parse_score_request(&query) {
        Ok(r) => r,
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": e.to_string()})),
    };

    match get_data_for_scores_page(source.get_ref(), request.tournament, request.year).await {
        Ok(data) => {
            if request.want_json {
                HttpResponse::Ok().json(data)
            } else {
                HttpResponse::Ok()
                    .content_type("text/html")
                    .body(render_scores_template(&data).into_string())
            }
        }
        Err(e) => error_response(&e, request.want_json),
    }
}

pub async fn compare(
    query: web::Query<HashMap<String, String>>,
    source: Data<dyn LeaderboardSource>,
) -> impl Responder {
    let request = match parse_compare_request(&query) {
        Ok(r) => r,
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": e.to_string()})),
    };

    match get_data_for_compare_page(
        source.get_ref(),
        request.year,
        &request.player1,
        &request.player2,
    )
    .await
    {
        Ok(data) => {
            if request.want_json {
                HttpResponse::Ok().json(data)
            } else {
                HttpResponse::Ok()
                    .content_type("text/html")
                    .body(render_compare_template(&data).into_string())
            }
        }
        Err(e) => error_response(&e, request.want_json),
    }
}

pub async fn players(
    query: web::Query<HashMap<String, String>>,
    source: Data<dyn LeaderboardSource>,
) -> impl Responder {
    let year = match parse_year(&query) {
        Ok(y) => y,
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": e.to_string()})),
    };
    let want_json = parse_want_json(&query);

    match load_season_table(source.get_ref(), year).await {
        Ok(loaded) => {
            let names = player_names(&loaded.players);
            if want_json {
                HttpResponse::Ok().json(names)
            } else {
                HttpResponse::Ok()
                    .content_type("text/html")
                    .body(render_player_options(&names).into_string())
            }
        }
        Err(e) => error_response(&e, want_json),
    }
}

/// Html callers get a 200 with a visible notice so htmx still swaps it in; json
/// callers get a status code per error kind.
fn error_response(e: &LeaderboardError, want_json: bool) -> HttpResponse {
    let status = match e {
        LeaderboardError::EmptyDataset | LeaderboardError::PlayerNotFound(_) => {
            StatusCode::NOT_FOUND
        }
        LeaderboardError::NoEligiblePlayers => StatusCode::UNPROCESSABLE_ENTITY,
        LeaderboardError::UpstreamFetchFailure(_) | LeaderboardError::Parse(_) => {
            StatusCode::BAD_GATEWAY
        }
        LeaderboardError::Config(_) | LeaderboardError::Other(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    if status.is_server_error() {
        warn!("Request failed: {e}");
    }

    let message = match e {
        LeaderboardError::EmptyDataset => {
            "No data available for the selected year and tournament.".to_string()
        }
        LeaderboardError::PlayerNotFound(names) => {
            format!("No rounds found for: {}", names.join(", "))
        }
        other => other.to_string(),
    };

    if want_json {
        let body = match e {
            LeaderboardError::PlayerNotFound(names) => {
                json!({"error": message, "missing_players": names})
            }
            _ => json!({"error": message}),
        };
        HttpResponse::build(status).json(body)
    } else {
        HttpResponse::Ok()
            .content_type("text/html")
            .body(render_notice(&message).into_string())
    }
}
