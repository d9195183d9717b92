use std::time::Duration;

use axum::http::StatusCode;
use thiserror::Error;

/// Upstream bodies quoted in error messages are cut to this many characters.
pub const EXCERPT_CHARS: usize = 200;

/// Failure of a single submission exchange.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelayError {
    #[error("submission endpoint is not configured")]
    NotConfigured,
    #[error("upstream returned {status}: {excerpt}")]
    Upstream { status: u16, excerpt: String },
    #[error("upstream timed out after {}s", .0.as_secs_f64())]
    Timeout(Duration),
    #[error("failed to reach upstream: {0}")]
    Transport(String),
}

impl RelayError {
    pub fn upstream(status: u16, body: &str) -> Self {
        RelayError::Upstream {
            status,
            excerpt: excerpt(body),
        }
    }

    /// HTTP status the relay answers with for this failure.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::NotConfigured | RelayError::Transport(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            RelayError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            RelayError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, RelayError::Timeout(_))
    }
}

fn excerpt(body: &str) -> String {
    body.chars().take(EXCERPT_CHARS).collect()
}
