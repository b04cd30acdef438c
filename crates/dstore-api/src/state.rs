//! # Application State
//!
//! Configuration read at startup and the shared state handed to every
//! route handler via the `State` extractor.
//!
//! The state is assembled once by [`crate::bootstrap::bootstrap`] before
//! the listener binds and is never mutated afterwards, so handlers read it
//! without locking.

use std::sync::Arc;

use dstore_walrus::BlobStore;

use crate::input::CachedInput;

/// Default listen port.
pub const DEFAULT_PORT: u16 = 8083;

/// Which process variant to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Store the fixed input blob at startup and serve `/get` next to `/store`.
    WithInput,
    /// Serve `/store` only.
    StoreOnly,
}

impl std::str::FromStr for Variant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "with-input" => Ok(Self::WithInput),
            "store-only" => Ok(Self::StoreOnly),
            other => Err(ConfigError::UnknownVariant(other.to_string())),
        }
    }
}

/// Where blobs are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Live Walrus publisher/aggregator.
    Walrus,
    /// In-process content-addressed store; nothing leaves the process.
    Memory,
}

impl std::str::FromStr for Backend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "walrus" => Ok(Self::Walrus),
            "memory" => Ok(Self::Memory),
            other => Err(ConfigError::UnknownBackend(other.to_string())),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub variant: Variant,
    pub backend: Backend,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            variant: Variant::WithInput,
            backend: Backend::Walrus,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `PORT` (default: 8083)
    /// - `DSTORE_VARIANT` — `with-input` (default) or `store-only`
    /// - `DSTORE_BACKEND` — `walrus` (default) or `memory`
    pub fn from_env() -> Result<Self, ConfigError> {
        let port: u16 = match std::env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };
        let variant = match std::env::var("DSTORE_VARIANT") {
            Ok(raw) => raw.parse()?,
            Err(_) => Variant::WithInput,
        };
        let backend = match std::env::var("DSTORE_BACKEND") {
            Ok(raw) => raw.parse()?,
            Err(_) => Backend::Walrus,
        };
        Ok(Self {
            port,
            variant,
            backend,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got {0:?}")]
    InvalidPort(String),
    #[error("unknown DSTORE_VARIANT {0:?} (expected \"with-input\" or \"store-only\")")]
    UnknownVariant(String),
    #[error("unknown DSTORE_BACKEND {0:?} (expected \"walrus\" or \"memory\")")]
    UnknownBackend(String),
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Blob store every handler writes through.
    pub store: Arc<dyn BlobStore>,
    /// Startup input, present only in the `with-input` variant.
    pub input: Option<Arc<CachedInput>>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("store", &"<dyn BlobStore>")
            .field("input", &self.input)
            .finish()
    }
}

impl AppState {
    /// State for the `store-only` variant.
    pub fn new(store: Arc<dyn BlobStore>) -> Self {
        Self { store, input: None }
    }

    /// State carrying an already-stored startup input.
    pub fn with_input(store: Arc<dyn BlobStore>, input: CachedInput) -> Self {
        Self {
            store,
            input: Some(Arc::new(input)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_documented_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.port, 8083);
        assert_eq!(cfg.variant, Variant::WithInput);
        assert_eq!(cfg.backend, Backend::Walrus);
    }

    #[test]
    fn variant_parses_known_names() {
        assert_eq!("with-input".parse::<Variant>().unwrap(), Variant::WithInput);
        assert_eq!("store-only".parse::<Variant>().unwrap(), Variant::StoreOnly);
    }

    #[test]
    fn variant_rejects_unknown_name() {
        let err = "both".parse::<Variant>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownVariant(name) if name == "both"));
    }

    #[test]
    fn backend_parses_known_names() {
        assert_eq!("walrus".parse::<Backend>().unwrap(), Backend::Walrus);
        assert_eq!("memory".parse::<Backend>().unwrap(), Backend::Memory);
        assert!("s3".parse::<Backend>().is_err());
    }

    #[test]
    fn debug_hides_store_internals() {
        let state = AppState::new(Arc::new(dstore_walrus::MemoryBlobStore::new()));
        let debug = format!("{state:?}");
        assert!(debug.contains("<dyn BlobStore>"));
        assert!(debug.contains("input: None"));
    }
}
