use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info, warn};

use crate::config::RelayConfig;
use crate::error::RelayError;
use crate::payload::SubmissionPayload;
use crate::reply::RelayReply;

/// Destination of finished submissions.
pub trait SubmissionSink {
    fn submit(
        &self,
        payload: &SubmissionPayload,
    ) -> impl Future<Output = Result<RelayReply, RelayError>> + Send;
}

/// Forwards submissions to the spreadsheet endpoint. Holds no mutable state
/// and can be shared across concurrent requests.
#[derive(Debug, Clone)]
pub struct Relay {
    client: Client,
    endpoint: Option<String>,
    timeout: Duration,
}

impl Relay {
    pub fn new(config: &RelayConfig) -> Result<Self, RelayError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|error| RelayError::Transport(error.to_string()))?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            timeout: config.timeout,
        })
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Performs one full exchange. A missing endpoint fails before any
    /// network activity; redirects are followed.
    pub async fn forward(&self, payload: &SubmissionPayload) -> Result<RelayReply, RelayError> {
        let Some(endpoint) = self.endpoint.as_deref() else {
            warn!("submission rejected: endpoint not configured");
            return Err(RelayError::NotConfigured);
        };

        debug!(endpoint, "forwarding survey submission");
        let response = self
            .client
            .post(endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|error| self.transport_error(error))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|error| self.transport_error(error))?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "upstream rejected submission");
            return Err(RelayError::upstream(status.as_u16(), &body));
        }

        let reply = RelayReply::normalize(&body);
        info!(status = ?reply.status, "submission relayed");
        Ok(reply)
    }

    fn transport_error(&self, error: reqwest::Error) -> RelayError {
        if error.is_timeout() {
            warn!(timeout = ?self.timeout, "upstream timed out");
            RelayError::Timeout(self.timeout)
        } else {
            warn!(%error, "upstream unreachable");
            RelayError::Transport(error.to_string())
        }
    }
}

impl SubmissionSink for Relay {
    fn submit(
        &self,
        payload: &SubmissionPayload,
    ) -> impl Future<Output = Result<RelayReply, RelayError>> + Send {
        self.forward(payload)
    }
}
