//! Runtime configuration from environment variables
//!
//! Built once at startup and passed by reference into every component;
//! nothing re-reads the environment mid-run.

use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    /// Bearer token for the stats provider.
    pub api_key: String,
    /// Team name whose records are excluded from aggregation. `None`
    /// disables the filter.
    pub excluded_team: Option<String>,
    /// IANA timezone name for window alignment. `None` means the default
    /// zone.
    pub time_zone: Option<String>,
    /// Path to the roster JSON file.
    pub roster_path: String,
    /// Interval between scheduled refresh passes.
    pub refresh_interval: Duration,
    /// Per-request timeout for provider calls.
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// - `FACEIT_API_KEY` (required)
    /// - `TEAM_NAME` (optional, empty disables the exclusion filter)
    /// - `TIME_ZONE` (optional IANA name, default US/Eastern)
    /// - `ROSTER_PATH` (default: data/players.json)
    /// - `REFRESH_INTERVAL_SECS` (default: 3600)
    /// - `REQUEST_TIMEOUT_SECS` (default: 10)
    pub fn from_env() -> Result<Self, MissingConfig> {
        let api_key = env::var("FACEIT_API_KEY").map_err(|_| MissingConfig("FACEIT_API_KEY"))?;

        Ok(Self {
            api_key,
            excluded_team: env::var("TEAM_NAME").ok().filter(|t| !t.is_empty()),
            time_zone: env::var("TIME_ZONE").ok().filter(|z| !z.is_empty()),
            roster_path: env::var("ROSTER_PATH")
                .unwrap_or_else(|_| "data/players.json".to_string()),
            refresh_interval: Duration::from_secs(
                env::var("REFRESH_INTERVAL_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(3_600),
            ),
            request_timeout: Duration::from_secs(
                env::var("REQUEST_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(10),
            ),
        })
    }
}

#[derive(Debug)]
pub struct MissingConfig(pub &'static str);

impl std::fmt::Display for MissingConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} must be set", self.0)
    }
}

impl std::error::Error for MissingConfig {}
