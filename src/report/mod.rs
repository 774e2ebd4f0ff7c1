//! Result reporting
//!
//! After a game resolves, its outcome is sent once to an external collector.
//! Reporting is fire-and-forget from the game's point of view: failures are
//! returned to the caller of [`ResultReporter::report`] (the session), which
//! only logs them.

use crate::protocol::OutcomeReport;

/// Errors raised while delivering an outcome.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("result report transport failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("result endpoint answered with HTTP {status}")]
    Status { status: u16 },
}

/// Destination for completed game outcomes.
#[async_trait::async_trait]
pub trait ResultReporter: Send + Sync {
    async fn report(&self, outcome: &OutcomeReport) -> Result<(), ReportError>;
}

/// Reporter used when reporting is disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

#[async_trait::async_trait]
impl ResultReporter for NullReporter {
    async fn report(&self, outcome: &OutcomeReport) -> Result<(), ReportError> {
        log::debug!("reporting disabled, dropping {:?}", outcome);
        Ok(())
    }
}

pub mod http;
pub use http::HttpReporter;
