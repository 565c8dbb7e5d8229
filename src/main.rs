use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpResponse, HttpServer, web};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use rusty_golf_charts::args;
use rusty_golf_charts::controller::leaderboard::{LeaderboardSource, build_source};
use rusty_golf_charts::controller::score::{compare, index, players, scores};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = match args::args_checks() {
        Ok(a) => a,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    let source: Data<dyn LeaderboardSource> = Data::from(build_source(&args.source)?);
    let static_dir = args.static_dir.clone();

    info!("Listening on {}:{}", args.bind, args.port);
    HttpServer::new(move || {
        App::new()
            .app_data(source.clone())
            .route("/", web::get().to(index))
            .route("/scores", web::get().to(scores))
            .route("/compare", web::get().to(compare))
            .route("/players", web::get().to(players))
            .route("/health", web::get().to(HttpResponse::Ok))
            .service(Files::new("/static", static_dir.clone()))
    })
    .bind((args.bind.as_str(), args.port))?
    .run()
    .await?;
    Ok(())
}
