use std::string::String;
use std::time::Duration;

use crate::protocol::OutcomeReport;

use super::{ReportError, ResultReporter};

/// Posts each outcome as JSON to a fixed endpoint. No retries.
pub struct HttpReporter {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpReporter {
    /// Build a reporter whose requests give up after `timeout`.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ReportError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl ResultReporter for HttpReporter {
    async fn report(&self, outcome: &OutcomeReport) -> Result<(), ReportError> {
        // `json` sets `Content-Type: application/json`.
        let response = self.client.post(&self.endpoint).json(outcome).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ReportError::Status {
                status: status.as_u16(),
            });
        }
        log::info!("reported outcome to {} ({})", self.endpoint, status);
        Ok(())
    }
}
