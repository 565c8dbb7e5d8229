pub mod client;
pub mod flat_file;
pub mod processing;

pub use client::*;
pub use flat_file::*;
pub use processing::*;

use std::sync::Arc;
use tracing::info;

use crate::args::SourceConfig;
use crate::error::LeaderboardError;

/// # Errors
///
/// Will return `Err` if the flat file can't be read or parsed
pub fn build_source(config: &SourceConfig) -> Result<Arc<dyn LeaderboardSource>, LeaderboardError> {
    match config {
        SourceConfig::Live(api) => {
            info!("Using live leaderboard at {}", api.base_url);
            Ok(Arc::new(RapidApiClient::new(api.clone())))
        }
        SourceConfig::FlatFile(path) => Ok(Arc::new(FlatFileSource::open(path)?)),
    }
}
