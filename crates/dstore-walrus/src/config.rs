//! Walrus client configuration.
//!
//! Holds the publisher (write) and aggregator (read) base URLs. Defaults
//! point to the public Walrus testnet. Override via environment variables
//! or explicit construction for local testing.

use url::Url;

/// Default Walrus testnet publisher.
pub const DEFAULT_PUBLISHER_URL: &str = "https://publisher.walrus-testnet.walrus.space";

/// Default Walrus testnet aggregator.
pub const DEFAULT_AGGREGATOR_URL: &str = "https://aggregator.walrus-testnet.walrus.space";

/// Configuration for connecting to a Walrus deployment.
#[derive(Debug, Clone)]
pub struct WalrusConfig {
    /// Base URL of the publisher, which accepts writes.
    pub publisher_url: Url,
    /// Base URL of the aggregator, which serves reads.
    pub aggregator_url: Url,
    /// Optional request timeout in seconds. `None` waits indefinitely.
    pub timeout_secs: Option<u64>,
}

impl WalrusConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `WALRUS_PUBLISHER_URL` (default: testnet publisher)
    /// - `WALRUS_AGGREGATOR_URL` (default: testnet aggregator)
    /// - `WALRUS_TIMEOUT_SECS` (default: unset, no timeout)
    pub fn from_env() -> Result<Self, ConfigError> {
        let timeout_secs: Option<u64> = match std::env::var("WALRUS_TIMEOUT_SECS") {
            Ok(raw) => Some(
                raw.parse()
                    .map_err(|_| ConfigError::InvalidTimeout(raw.clone()))?,
            ),
            Err(_) => None,
        };

        Ok(Self {
            publisher_url: env_url("WALRUS_PUBLISHER_URL", DEFAULT_PUBLISHER_URL)?,
            aggregator_url: env_url("WALRUS_AGGREGATOR_URL", DEFAULT_AGGREGATOR_URL)?,
            timeout_secs,
        })
    }

    /// Point both roles at a single local server (for testing).
    pub fn local_mock(base_url: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(base_url)
            .map_err(|e| ConfigError::InvalidUrl(base_url.to_string(), e.to_string()))?;
        Ok(Self {
            publisher_url: url.clone(),
            aggregator_url: url,
            timeout_secs: Some(5),
        })
    }
}

fn env_url(var: &str, default: &str) -> Result<Url, ConfigError> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(var.to_string(), e.to_string()))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
    #[error("WALRUS_TIMEOUT_SECS must be a whole number of seconds, got {0:?}")]
    InvalidTimeout(String),
}
