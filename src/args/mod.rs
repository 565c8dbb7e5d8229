use clap::Parser;
use std::fs;

pub mod types;
pub mod validation;

pub use types::{ApiConfig, Args, CleanArgs, SourceConfig};

use crate::error::LeaderboardError;

/// # Errors
///
/// Will return `Err` if the arguments are invalid or the api key file can't be read
pub fn args_checks() -> Result<CleanArgs, LeaderboardError> {
    let args = Args::parse();
    args.validate().map_err(LeaderboardError::Config)?;
    CleanArgs::new(args)
}

impl ApiConfig {
    /// Reads the key from `api_key_file`; surrounding whitespace is dropped.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the key file is unreadable or empty
    pub fn from_args(args: &Args) -> Result<Self, LeaderboardError> {
        let api_key = fs::read_to_string(&args.api_key_file).map_err(|e| {
            LeaderboardError::Config(format!(
                "Failed to read api key file '{}': {e}",
                args.api_key_file.display()
            ))
        })?;
        let api_key = api_key.trim().to_string();
        if api_key.is_empty() {
            return Err(LeaderboardError::Config(format!(
                "The api key file '{}' is empty.",
                args.api_key_file.display()
            )));
        }
        Ok(ApiConfig {
            api_key,
            api_host: args.api_host.clone(),
            base_url: args.base_url.clone(),
            org_id: args.org_id.clone(),
        })
    }
}

impl CleanArgs {
    /// # Errors
    ///
    /// Will return `Err` if the live source is selected and its key can't be loaded
    pub fn new(args: Args) -> Result<Self, LeaderboardError> {
        let source = match &args.scoreboard_csv {
            Some(path) => SourceConfig::FlatFile(path.clone()),
            None => SourceConfig::Live(ApiConfig::from_args(&args)?),
        };
        Ok(CleanArgs {
            source,
            bind: args.bind,
            port: args.port,
            static_dir: args.static_dir,
        })
    }
}
