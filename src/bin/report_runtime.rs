//! Report Runtime
//!
//! Wires the live pipeline: roster file → FACEIT client → report engine →
//! log sink, refreshed hourly until Ctrl+C.
//!
//! Usage:
//!   cargo run --release --bin report_runtime
//!
//! Environment variables:
//!   FACEIT_API_KEY        - stats API bearer token (required)
//!   TEAM_NAME             - team excluded from aggregation (optional)
//!   TIME_ZONE             - IANA zone for week alignment (default US/Eastern)
//!   ROSTER_PATH           - roster JSON path (default data/players.json)
//!   REFRESH_INTERVAL_SECS - refresh period (default 3600)
//!   REQUEST_TIMEOUT_SECS  - per-request timeout (default 10)

use dotenv::dotenv;
use log::info;
use matchweek::engine::ReportEngine;
use matchweek::faceit::FaceitClient;
use matchweek::roster::{LiveRoster, RosterStore};
use matchweek::scheduler::refresh_task;
use matchweek::sink::LogSink;
use matchweek::Config;
use std::sync::Arc;
use tokio::sync::watch;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;
    info!("Starting report runtime");
    info!("   Roster: {}", config.roster_path);
    info!(
        "   Zone: {}",
        config.time_zone.as_deref().unwrap_or("US/Eastern (default)")
    );
    match &config.excluded_team {
        Some(team) => info!("   Excluding team: {}", team),
        None => info!("   No team exclusion configured"),
    }
    info!("   Refresh interval: {:?}", config.refresh_interval);

    let client = Arc::new(FaceitClient::new(&config)?);
    let roster = LiveRoster::new(RosterStore::new(&config.roster_path), client.clone());

    let refresh_interval = config.refresh_interval;
    let engine = Arc::new(ReportEngine::new(
        config,
        Arc::new(roster),
        client,
        Arc::new(LogSink),
    ));

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let scheduler = tokio::spawn(refresh_task(engine, refresh_interval, shutdown_rx));

    info!("Runtime up. Press Ctrl+C to exit.");
    tokio::signal::ctrl_c().await?;

    info!("Shutting down...");
    shutdown_tx.send(true)?;
    scheduler.await?;

    Ok(())
}
