//! FACEIT open-data API client
//!
//! Implements [`MatchRecordProvider`] against the live stats API and
//! resolves roster nicknames to stable player identifiers.
//!
//! ## API Reference
//!
//! - Player lookup: `GET /players?nickname={nickname}`
//! - Stat-lines:    `GET /players/{player_id}/games/cs2/stats?from&to`
//!   (`from`/`to` are millisecond epoch bounds, half-open)

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use crate::config::Config;
use crate::report_core::{FetchError, MatchRecord, MatchRecordProvider, Player, WeekWindow};

const BASE_URL: &str = "https://open.faceit.com/data/v4";
const GAME: &str = "cs2";
const PAGE_LIMIT: u32 = 30;

pub struct FaceitClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

/// Wrapper for the stats list response: each item nests the stat-line
/// under a `stats` key.
#[derive(Debug, Deserialize)]
struct StatsPage {
    #[serde(default)]
    items: Vec<StatsItem>,
}

#[derive(Debug, Deserialize)]
struct StatsItem {
    stats: MatchRecord,
}

#[derive(Debug, Deserialize)]
struct PlayerLookup {
    #[serde(default)]
    player_id: String,
}

impl FaceitClient {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: BASE_URL.to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// Point the client at a different endpoint, for exercising the wire
    /// path against a local server.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .bearer_auth(&self.api_key)
            .header("Accept", "application/json")
    }

    /// Resolve a nickname to its stable player identifier.
    pub async fn resolve_player(&self, nickname: &str) -> Result<String, FetchError> {
        let response = self
            .get("/players")
            .query(&[("nickname", nickname)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::Transport(format!(
                "player lookup for {} failed with status {}",
                nickname,
                response.status()
            )));
        }

        let lookup: PlayerLookup = response.json().await?;
        if lookup.player_id.is_empty() {
            return Err(FetchError::Parse(format!(
                "no player id in lookup response for {}",
                nickname
            )));
        }
        Ok(lookup.player_id)
    }

    /// Resolve a whole roster, skipping nicknames that fail to resolve.
    pub async fn resolve_roster(&self, nicknames: &[String]) -> Vec<Player> {
        let mut players = Vec::with_capacity(nicknames.len());
        for nickname in nicknames {
            match self.resolve_player(nickname).await {
                Ok(player_id) => players.push(Player {
                    nickname: nickname.clone(),
                    player_id,
                }),
                Err(e) => {
                    log::warn!("Skipping unresolvable roster entry {}: {}", nickname, e);
                }
            }
        }
        players
    }
}

#[async_trait]
impl MatchRecordProvider for FaceitClient {
    async fn fetch_records(
        &self,
        player_id: &str,
        window: &WeekWindow,
    ) -> Result<Vec<MatchRecord>, FetchError> {
        let response = self
            .get(&format!("/players/{}/games/{}/stats", player_id, GAME))
            .query(&[
                ("from", window.start_ms.to_string()),
                ("to", window.end_ms.to_string()),
                ("offset", "0".to_string()),
                ("limit", PAGE_LIMIT.to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::Transport(format!(
                "stats request for {} failed with status {}",
                player_id,
                response.status()
            )));
        }

        let page: StatsPage = response.json().await?;
        Ok(page.items.into_iter().map(|item| item.stats).collect())
    }
}
