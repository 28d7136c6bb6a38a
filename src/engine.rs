//! Report generation pipeline and its single-flight gate

use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::config::Config;
use crate::report_core::{
    rank, render_table, MatchRecordProvider, WeekWindow, WeeklyAggregator,
};
use crate::roster::RosterProvider;
use crate::sink::ReportSink;

/// Owns one wired pipeline: roster → provider → aggregation → rendering →
/// sink. Manual and scheduled triggers both go through [`refresh`],
/// guarded so overlapping invocations are rejected instead of stacking.
///
/// [`refresh`]: ReportEngine::refresh
pub struct ReportEngine {
    config: Config,
    roster: Arc<dyn RosterProvider>,
    provider: Arc<dyn MatchRecordProvider>,
    sink: Arc<dyn ReportSink>,
    gate: Mutex<()>,
}

impl ReportEngine {
    pub fn new(
        config: Config,
        roster: Arc<dyn RosterProvider>,
        provider: Arc<dyn MatchRecordProvider>,
        sink: Arc<dyn ReportSink>,
    ) -> Self {
        Self {
            config,
            roster,
            provider,
            sink,
            gate: Mutex::new(()),
        }
    }

    /// Produce the rendered weekly report for one window.
    ///
    /// Deterministic for fixed roster and provider data: same window in,
    /// same text block out.
    pub async fn weekly_report(&self, window: &WeekWindow) -> String {
        let roster = self.roster.roster().await;
        let aggregates = WeeklyAggregator::collect(
            &roster,
            self.provider.as_ref(),
            window,
            self.config.excluded_team.as_deref(),
        )
        .await;
        let ranked = rank(&aggregates);
        render_table(&ranked)
    }

    /// One refresh pass: last week and current week, each published under
    /// its own marker.
    ///
    /// Returns `false` without doing any work when a prior pass is still
    /// in flight.
    pub async fn refresh(&self) -> bool {
        let _flight = match self.gate.try_lock() {
            Ok(guard) => guard,
            Err(_) => {
                log::warn!("Refresh already in flight, skipping this trigger");
                return false;
            }
        };

        self.run_pass("Last Week", Utc::now() - Duration::days(7))
            .await;
        self.run_pass("Current Week", Utc::now()).await;
        true
    }

    async fn run_pass(&self, label: &str, reference: DateTime<Utc>) {
        let window = WeekWindow::resolve(reference, self.config.time_zone.as_deref());
        log::info!("{}: {} -> {}", label, window.start_label, window.end_label);

        let table = self.weekly_report(&window).await;
        let marker = report_marker(label, &window);
        let message = format!("{}\n\n```{}```", marker, table);

        if let Err(e) = self.sink.publish(&marker, &message).await {
            log::warn!("Failed to publish {} report: {}", label, e);
        }
    }
}

/// Stable prefix a sink can use to locate an earlier post of the same
/// report for in-place update.
pub fn report_marker(label: &str, window: &WeekWindow) -> String {
    format!(
        "**{} -- Match History**: {} -> {}",
        label, window.start_label, window.end_label
    )
}
