use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LeaderboardError {
    #[error("{0}")]
    UpstreamFetchFailure(String),
    #[error("no complete player with a recorded total")]
    NoEligiblePlayers,
    #[error("player not found: {}", .0.join(", "))]
    PlayerNotFound(Vec<String>),
    #[error("no data available for this selection")]
    EmptyDataset,
    #[error("parse error: {0}")]
    Parse(String),
    #[error("config error: {0}")]
    Config(String),
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for LeaderboardError {
    fn from(err: reqwest::Error) -> Self {
        Self::UpstreamFetchFailure(format!("Failed to fetch data: {err}"))
    }
}

impl From<serde_json::Error> for LeaderboardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<csv::Error> for LeaderboardError {
    fn from(err: csv::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<std::io::Error> for LeaderboardError {
    fn from(err: std::io::Error) -> Self {
        Self::Other(err.to_string())
    }
}

impl From<String> for LeaderboardError {
    fn from(err: String) -> Self {
        Self::Other(err)
    }
}

impl From<&str> for LeaderboardError {
    fn from(err: &str) -> Self {
        Self::Other(err.to_string())
    }
}
