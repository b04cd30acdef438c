//! Walrus client error types.

/// Errors from Walrus publisher/aggregator calls.
#[derive(Debug, thiserror::Error)]
pub enum WalrusError {
    /// HTTP transport error.
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// Walrus returned a non-2xx status.
    #[error("Walrus {endpoint} returned {status}: {body}")]
    ApiError {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// Response body did not match either store outcome.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        endpoint: String,
        source: serde_json::Error,
    },
    /// No blob with this identifier exists in the store.
    #[error("blob not found: {0}")]
    NotFound(String),
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] super::config::ConfigError),
}
