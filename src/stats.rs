//! Game API client for title screen statistics.
//!
//! `GET {api_base}/game/titlestats` returns the number of players online and
//! the number of battles fought. The title screen only reads it through the
//! [`StatsSource`] trait so the poller can be driven by fakes in tests.

use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// User agent for API requests
const USER_AGENT: &str = concat!("Titlescreen/", env!("CARGO_PKG_VERSION"));

/// Path of the statistics endpoint relative to the API base
const TITLE_STATS_PATH: &str = "game/titlestats";

/// Aggregate counts shown on the title screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleStats {
    pub player_count: u64,
    pub battle_count: u64,
}

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Game API error: {0}")]
    Status(reqwest::StatusCode),

    #[error("Invalid API base URL '{0}'")]
    InvalidBaseUrl(String),
}

/// Anything that can produce a fresh [`TitleStats`]
pub trait StatsSource: Send + Sync + 'static {
    fn fetch(&self) -> BoxFuture<'static, Result<TitleStats, StatsError>>;
}

/// Game API client
#[derive(Clone)]
pub struct StatsClient {
    client: reqwest::Client,
    base_url: String,
}

impl StatsClient {
    /// Create a client for the given API base URL
    pub fn new(base_url: &str) -> Result<Self, StatsError> {
        match reqwest::Url::parse(base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            _ => return Err(StatsError::InvalidBaseUrl(base_url.to_string())),
        }

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(std::time::Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Full URL of the statistics endpoint
    pub fn title_stats_url(&self) -> String {
        format!("{}/{}", self.base_url, TITLE_STATS_PATH)
    }

    /// Fetch the current player and battle counts
    pub async fn get_title_stats(&self) -> Result<TitleStats, StatsError> {
        let start = std::time::Instant::now();
        let response = self.client.get(self.title_stats_url()).send().await?;

        if !response.status().is_success() {
            return Err(StatsError::Status(response.status()));
        }

        let stats: TitleStats = response.json().await?;
        tracing::debug!(
            "Fetched title stats ({} players, {} battles) in {:.2}s",
            stats.player_count,
            stats.battle_count,
            start.elapsed().as_secs_f32()
        );
        Ok(stats)
    }
}

impl StatsSource for StatsClient {
    fn fetch(&self) -> BoxFuture<'static, Result<TitleStats, StatsError>> {
        let client = self.clone();
        Box::pin(async move { client.get_title_stats().await })
    }
}
