use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

pub const ENDPOINT_VAR: &str = "SURVEY_ENDPOINT_URL";
pub const TIMEOUT_VAR: &str = "SURVEY_RELAY_TIMEOUT_SECS";
pub const BIND_VAR: &str = "SURVEY_RELAY_BIND";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a positive number of seconds, got '{value}'")]
    InvalidTimeout { var: &'static str, value: String },
    #[error("{var} is not a socket address: '{value}'")]
    InvalidBind { var: &'static str, value: String },
}

/// Relay settings read from the process environment.
///
/// A missing endpoint is not a configuration error here; the relay reports
/// it per submission so the rest of the surface keeps working.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub endpoint: Option<String>,
    pub timeout: Duration,
    pub bind: SocketAddr,
}

impl RelayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = lookup(ENDPOINT_VAR)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        let timeout = match lookup(TIMEOUT_VAR) {
            Some(raw) => parse_timeout(&raw)?,
            None => DEFAULT_TIMEOUT,
        };

        let bind_raw = lookup(BIND_VAR).unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidBind {
                var: BIND_VAR,
                value: bind_raw.clone(),
            })?;

        Ok(Self {
            endpoint,
            timeout,
            bind,
        })
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout: DEFAULT_TIMEOUT,
            bind: SocketAddr::from(([127, 0, 0, 1], 8080)),
        }
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout {
            var: TIMEOUT_VAR,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = RelayConfig::from_lookup(lookup(&[])).expect("config");
        assert_eq!(config, RelayConfig::default());
    }

    #[test]
    fn blank_endpoint_counts_as_missing() {
        let config = RelayConfig::from_lookup(lookup(&[(ENDPOINT_VAR, "  ")])).expect("config");
        assert_eq!(config.endpoint, None);
    }

    #[test]
    fn reads_all_variables() {
        let config = RelayConfig::from_lookup(lookup(&[
            (ENDPOINT_VAR, "https://script.example.com/exec"),
            (TIMEOUT_VAR, "5"),
            (BIND_VAR, "0.0.0.0:9000"),
        ]))
        .expect("config");
        assert_eq!(
            config.endpoint.as_deref(),
            Some("https://script.example.com/exec")
        );
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.bind.port(), 9000);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            RelayConfig::from_lookup(lookup(&[(TIMEOUT_VAR, "0")])),
            Err(ConfigError::InvalidTimeout { .. })
        ));
        assert!(matches!(
            RelayConfig::from_lookup(lookup(&[(BIND_VAR, "localhost")])),
            Err(ConfigError::InvalidBind { .. })
        ));
    }
}
