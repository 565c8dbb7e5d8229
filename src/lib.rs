pub mod args;
pub mod error;
pub mod model;
pub mod controller {
    pub mod leaderboard;
    pub mod score;
}
pub mod view {
    pub mod index;
    pub mod score;
}

const HTMX_PATH: &str = "https://unpkg.com/htmx.org@1.9.12";

pub use controller::leaderboard::{FlatFileSource, LeaderboardSource, RapidApiClient};
pub use error::LeaderboardError;
