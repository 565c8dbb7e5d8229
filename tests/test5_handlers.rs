mod common;

use actix_web::web::{self, Data};
use actix_web::{App, test};
use scraper::{Html, Selector};
use serde_json::Value;
use std::sync::Arc;

use common::{StubSource, complete, player};
use rusty_golf_charts::controller::leaderboard::LeaderboardSource;
use rusty_golf_charts::controller::score::{compare, index, players, scores};
use rusty_golf_charts::model::Tournament;

fn stub() -> StubSource {
    StubSource::default()
        .with(
            Tournament::Masters,
            vec![
                complete("Scottie Scheffler", Tournament::Masters.venue(), 69),
                complete("Collin Morikawa", Tournament::Masters.venue(), 72),
                player(
                    "Rory McIlroy",
                    Tournament::Masters.venue(),
                    [Some(71), Some(77), None, None],
                    Some(148),
                    "cut",
                ),
            ],
        )
        .with(
            Tournament::PgaChamp,
            vec![complete("Scottie Scheffler", Tournament::PgaChamp.venue(), 67)],
        )
        .with(
            Tournament::Olympics,
            vec![player(
                "Tommy Fleetwood",
                Tournament::Olympics.venue(),
                [Some(66), Some(67), None, None],
                Some(133),
                "active",
            )],
        )
        .failing(Tournament::UsOpen)
}

macro_rules! app {
    ($source:expr) => {{
        let source: Arc<dyn LeaderboardSource> = Arc::new($source);
        test::init_service(
            App::new()
                .app_data(Data::from(source))
                .route("/", web::get().to(index))
                .route("/scores", web::get().to(scores))
                .route("/compare", web::get().to(compare))
                .route("/players", web::get().to(players)),
        )
        .await
    }};
}

fn texts(html: &str, selector: &str) -> Vec<String> {
    let doc = Html::parse_document(html);
    let Ok(sel) = Selector::parse(selector) else {
        return vec![];
    };
    doc.select(&sel)
        .map(|e| e.text().collect::<String>().trim().to_string())
        .collect()
}

#[actix_web::test]
async fn test_index_page() {
    let app = app!(stub());
    let req = test::TestRequest::get().uri("/").to_request();
    let body = test::call_and_read_body(&app, req).await;
    let html = String::from_utf8_lossy(&body);

    let options = texts(&html, "#tournament-select option");
    assert_eq!(
        options,
        vec!["Masters", "PGA Champ", "US Open", "Open Champ", "Olympics"]
    );
    assert_eq!(texts(&html, ".tab-button"), vec!["Years", "Players"]);
}

#[actix_web::test]
async fn test_scores_html() {
    let app = app!(stub());
    let req = test::TestRequest::get()
        .uri("/scores?tournament=Masters&yr=2024")
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    let html = String::from_utf8_lossy(&body);

    assert_eq!(texts(&html, "#leaderboard-table tbody tr").len(), 3);
    let rounds = texts(&html, "#round-summary-table tbody tr td:first-child");
    assert_eq!(
        rounds,
        vec!["First Round", "Second Round", "Third Round", "Fourth Round"]
    );
    let averages = texts(&html, "#round-summary-table tbody tr td:nth-child(2)");
    assert_eq!(averages, vec!["70.50", "70.50", "70.50", "70.50"]);
    assert!(html.contains("<svg"));
}

#[actix_web::test]
async fn test_scores_json() {
    let app = app!(stub());
    let req = test::TestRequest::get()
        .uri("/scores?tournament=pga%20champ&yr=2024&json=1")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["tournament"], "PgaChamp");
    assert_eq!(body["players"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["round_summary"][0]["leader_score"], 67);
    assert_eq!(body["round_summary"][3]["average_score"], 67.0);
}

#[actix_web::test]
async fn test_scores_without_complete_players() {
    let app = app!(stub());
    let req = test::TestRequest::get()
        .uri("/scores?tournament=Olympics&yr=2024")
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    let html = String::from_utf8_lossy(&body);

    assert_eq!(texts(&html, "#leaderboard-table tbody tr").len(), 1);
    assert!(texts(&html, "#round-summary-table").is_empty());
    assert!(html.contains("No player has completed this tournament yet"));
}

#[actix_web::test]
async fn test_scores_upstream_failure() {
    let app = app!(stub());
    let req = test::TestRequest::get()
        .uri("/scores?tournament=US%20Open&yr=2024")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let body = test::read_body(resp).await;
    let html = String::from_utf8_lossy(&body);

    assert_eq!(texts(&html, ".warning"), vec!["Failed to fetch data: 503"]);
    assert!(html.contains("No data available for the selected year and tournament."));
}

#[actix_web::test]
async fn test_scores_bad_params() {
    let app = app!(stub());
    for uri in [
        "/scores?tournament=Masters",
        "/scores?tournament=Masters&yr=24",
        "/scores?tournament=Ryder%20Cup&yr=2024",
    ] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400, "{uri}");
    }
}

#[actix_web::test]
async fn test_compare_html() {
    let app = app!(stub());
    let req = test::TestRequest::get()
        .uri("/compare?yr=2024&p1=Scottie%20Scheffler&p2=Collin%20Morikawa")
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    let html = String::from_utf8_lossy(&body);

    let rows = texts(&html, "#comparison-table tbody tr td:nth-child(2)");
    assert_eq!(rows, vec!["Masters", "PGA Champ", "Masters"]);
    let averages = texts(&html, "#comparison-table tbody tr td:nth-child(3)");
    assert_eq!(averages, vec!["69.00", "67.00", "72.00"]);
    // the failing tournament is reported but doesn't sink the comparison
    assert_eq!(texts(&html, ".warning"), vec!["US Open: Failed to fetch data: 503"]);
}

#[actix_web::test]
async fn test_compare_missing_player() {
    let app = app!(stub());
    let req = test::TestRequest::get()
        .uri("/compare?yr=2024&p1=Scottie%20Scheffler&p2=Tiger%20Woods&json=1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["missing_players"], serde_json::json!(["Tiger Woods"]));

    let req = test::TestRequest::get()
        .uri("/compare?yr=2024&p1=Scottie%20Scheffler&p2=Tiger%20Woods")
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    let html = String::from_utf8_lossy(&body);
    assert_eq!(texts(&html, ".notice"), vec!["No rounds found for: Tiger Woods"]);
}

#[actix_web::test]
async fn test_compare_empty_year() {
    let app = app!(StubSource::default());
    let req = test::TestRequest::get()
        .uri("/compare?yr=1999&p1=A%20B&p2=C%20D&json=1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_players_list() {
    let app = app!(stub());
    let req = test::TestRequest::get()
        .uri("/players?yr=2024&json=1")
        .to_request();
    let body: Vec<String> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        body,
        vec![
            "Collin Morikawa",
            "Rory McIlroy",
            "Scottie Scheffler",
            "Tommy Fleetwood"
        ]
    );
}

#[actix_web::test]
async fn test_tee_time_formatted_only_for_display() {
    let mut leader = complete("Scottie Scheffler", Tournament::Masters.venue(), 69);
    leader.tee_time = Some("2024-04-14T14:35:00Z".to_string());
    let app = app!(StubSource::default().with(Tournament::Masters, vec![leader]));

    let req = test::TestRequest::get()
        .uri("/scores?tournament=Masters&yr=2024")
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    let html = String::from_utf8_lossy(&body);
    let cells = texts(&html, "#leaderboard-table tbody td");
    assert!(cells.contains(&"4/14 9:35a".to_string()));

    let req = test::TestRequest::get()
        .uri("/scores?tournament=Masters&yr=2024&json=1")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["players"][0]["tee_time"], "2024-04-14T14:35:00Z");
}
