use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};

use super::processing::normalize_response;
use crate::args::ApiConfig;
use crate::error::LeaderboardError;
use crate::model::{PlayerRound, Tournament};

/// Anything able to produce a normalized table for one tournament-year.
#[async_trait]
pub trait LeaderboardSource: Send + Sync {
    async fn load_table(
        &self,
        tournament: Tournament,
        year: i32,
    ) -> Result<Vec<PlayerRound>, LeaderboardError>;
}

/// Live leaderboard endpoint behind the rapidapi gateway.
pub struct RapidApiClient {
    client: Client,
    config: ApiConfig,
}

impl RapidApiClient {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// # Errors
    ///
    /// Will return `Err` if the request fails or the endpoint answers with anything but 200
    pub async fn get_leaderboard_json(
        &self,
        tournament: Tournament,
        year: i32,
    ) -> Result<Value, LeaderboardError> {
        let year = year.to_string();
        let params = [
            ("orgId", self.config.org_id.as_str()),
            ("tournId", tournament.tourn_id()),
            ("year", year.as_str()),
        ];

        debug!("GET {} {:?}", self.config.base_url, params);
        let resp = self
            .client
            .get(&self.config.base_url)
            .header("x-rapidapi-key", &self.config.api_key)
            .header("x-rapidapi-host", &self.config.api_host)
            .query(&params)
            .send()
            .await?;

        let status = resp.status();
        if status != StatusCode::OK {
            warn!("Leaderboard fetch for {tournament} {year} returned {status}");
            return Err(LeaderboardError::UpstreamFetchFailure(format!(
                "Failed to fetch data: {}",
                status.as_u16()
            )));
        }

        Ok(resp.json::<Value>().await?)
    }
}

#[async_trait]
impl LeaderboardSource for RapidApiClient {
    async fn load_table(
        &self,
        tournament: Tournament,
        year: i32,
    ) -> Result<Vec<PlayerRound>, LeaderboardError> {
        let body = self.get_leaderboard_json(tournament, year).await?;
        Ok(normalize_response(&body))
    }
}
