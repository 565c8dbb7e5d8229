use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// File holding the rapidapi key for the live leaderboard.
    #[arg(long, value_name = "API_KEY_FILE", default_value = "golf_API_key")]
    pub api_key_file: PathBuf,
    #[arg(
        long,
        value_name = "API_HOST",
        default_value = "live-golf-data.p.rapidapi.com"
    )]
    pub api_host: String,
    #[arg(
        long,
        value_name = "BASE_URL",
        default_value = "https://live-golf-data.p.rapidapi.com/leaderboard",
        value_parser = crate::args::validation::check_url
    )]
    pub base_url: String,
    #[arg(long, value_name = "ORG_ID", default_value = "1")]
    pub org_id: String,
    /// If specified, scores are read from this csv instead of the live api.
    #[arg(long, value_name = "SCOREBOARD_CSV", value_parser = crate::args::validation::check_readable_file)]
    pub scoreboard_csv: Option<PathBuf>,
    #[arg(long, value_name = "BIND_ADDRESS", default_value = "0.0.0.0")]
    pub bind: String,
    #[arg(short = 'p', long, value_name = "PORT", default_value = "8081")]
    pub port: u16,
    #[arg(long, value_name = "STATIC_DIR", default_value = "./static")]
    pub static_dir: PathBuf,
}

/// Credentials and endpoint for the live leaderboard, built once at startup.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub api_key: String,
    pub api_host: String,
    pub base_url: String,
    pub org_id: String,
}

#[derive(Debug, Clone)]
pub enum SourceConfig {
    Live(ApiConfig),
    FlatFile(PathBuf),
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub source: SourceConfig,
    pub bind: String,
    pub port: u16,
    pub static_dir: PathBuf,
}
