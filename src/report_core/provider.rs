//! Provider trait for per-player match records
//!
//! Defines the boundary the aggregation pipeline fetches through, so the
//! live API client and test doubles are interchangeable.

use async_trait::async_trait;

use super::record::MatchRecord;
use super::window::WeekWindow;

#[derive(Debug)]
pub enum FetchError {
    Transport(String),
    Parse(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Parse(err.to_string())
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Parse(err.to_string())
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Transport(e) => write!(f, "transport error: {}", e),
            FetchError::Parse(e) => write!(f, "parse error: {}", e),
        }
    }
}

impl std::error::Error for FetchError {}

/// Source of raw stat-lines for one player over one window.
#[async_trait]
pub trait MatchRecordProvider: Send + Sync {
    /// Fetch every stat-line for `player_id` inside `window`.
    ///
    /// A failure here is per-player: callers log it and treat the player as
    /// having zero matches, never aborting the surrounding report.
    async fn fetch_records(
        &self,
        player_id: &str,
        window: &WeekWindow,
    ) -> Result<Vec<MatchRecord>, FetchError>;
}
