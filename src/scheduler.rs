//! Periodic refresh task
//!
//! Runs a refresh pass immediately, then on a fixed interval, until the
//! shutdown signal flips. The caller keeps the task handle and awaits it
//! at shutdown; in-flight provider calls are not cancelled, they run to
//! completion or to their own timeout.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::interval;

use crate::engine::ReportEngine;

pub async fn refresh_task(
    engine: Arc<ReportEngine>,
    period: Duration,
    mut shutdown: watch::Receiver<bool>,
) {
    log::info!("Starting refresh scheduler (interval: {:?})", period);

    // First tick fires immediately, covering the run-once-at-startup pass.
    let mut timer = interval(period);

    loop {
        tokio::select! {
            _ = timer.tick() => {
                log::info!("Scheduled refresh");
                engine.refresh().await;
            }
            _ = shutdown.changed() => {
                log::info!("Stopping refresh scheduler");
                break;
            }
        }
    }
}
