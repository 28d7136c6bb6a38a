//! Delivery boundary for rendered reports
//!
//! The engine only produces text; where it ends up (chat message edit,
//! fresh post, stdout) is the sink's business. The marker is a stable
//! prefix a sink can use to find and update a previously delivered report
//! in place.

use async_trait::async_trait;

#[async_trait]
pub trait ReportSink: Send + Sync {
    /// Deliver `body` under the stable `marker` prefix.
    async fn publish(
        &self,
        marker: &str,
        body: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

/// Sink that writes reports to the log. Useful on its own for headless
/// runs and as the default wiring in the runtime binary.
pub struct LogSink;

#[async_trait]
impl ReportSink for LogSink {
    async fn publish(
        &self,
        marker: &str,
        body: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        log::info!("{}\n{}", marker, body);
        Ok(())
    }
}
