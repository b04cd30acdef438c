//! # Startup Bootstrap
//!
//! Builds [`AppState`] before the listener binds.
//!
//! ## Bootstrap Sequence
//!
//! 1. **Connect Store** — Walrus client from environment, or the in-memory store.
//! 2. **Store Startup Input** (`with-input` only) — archive the fixed input
//!    payload and read it back.
//! 3. **Assemble State** — cache the input and its blob id for `/get`.
//!
//! Any failure aborts bootstrap. The entry point then exits without
//! serving, so a running server always has its startup input.

use std::sync::Arc;

use dstore_walrus::{BlobStore, MemoryBlobStore, WalrusClient, WalrusConfig, WalrusError};

use crate::archive::{self, ArchiveError};
use crate::input::{CachedInput, InputPayload};
use crate::state::{AppConfig, AppState, Backend, Variant};

/// Errors during startup.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    /// The Walrus client could not be configured.
    #[error("storage backend unavailable: {0}")]
    Backend(#[from] WalrusError),

    /// Storing or reading back the startup input failed.
    #[error("failed to store startup input: {0}")]
    Input(#[from] ArchiveError),
}

/// Build the blob store selected by `backend`.
pub fn connect_store(backend: Backend) -> Result<Arc<dyn BlobStore>, BootstrapError> {
    match backend {
        Backend::Walrus => {
            let config = WalrusConfig::from_env().map_err(WalrusError::from)?;
            tracing::info!(
                publisher = %config.publisher_url,
                aggregator = %config.aggregator_url,
                "Walrus client configured"
            );
            Ok(Arc::new(WalrusClient::new(config)?))
        }
        Backend::Memory => {
            tracing::warn!("using in-memory blob store; nothing is written to Walrus");
            Ok(Arc::new(MemoryBlobStore::new()))
        }
    }
}

/// Store the fixed startup input and read it back.
pub async fn init_input(store: &dyn BlobStore) -> Result<CachedInput, BootstrapError> {
    let payload = InputPayload::fixed();
    let blob_id = archive::archive_json(store, &payload).await?;
    archive::read_back(store, &blob_id).await?;

    tracing::info!(blob_id = %blob_id, "startup input stored");
    Ok(CachedInput::new(blob_id.into_string(), &payload))
}

/// Assemble application state for the configured variant.
pub async fn bootstrap(
    config: &AppConfig,
    store: Arc<dyn BlobStore>,
) -> Result<AppState, BootstrapError> {
    match config.variant {
        Variant::WithInput => {
            let input = init_input(store.as_ref()).await?;
            Ok(AppState::with_input(store, input))
        }
        Variant::StoreOnly => Ok(AppState::new(store)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{INPUT_MAG, INPUT_SIGN};

    #[tokio::test]
    async fn with_input_variant_caches_stored_input() {
        let memory = MemoryBlobStore::new();
        let store: Arc<dyn BlobStore> = Arc::new(memory.clone());
        let state = bootstrap(&AppConfig::default(), store).await.unwrap();

        let input = state.input.expect("input cached");
        assert_eq!(input.input_mag, INPUT_MAG.to_vec());
        assert_eq!(input.input_sign, INPUT_SIGN.to_vec());

        let expected_id = MemoryBlobStore::blob_id_for(
            &serde_json::to_vec(&InputPayload::fixed()).unwrap(),
        );
        assert_eq!(input.blob_id, expected_id.as_str());
        assert_eq!(memory.len(), 1);
    }

    #[tokio::test]
    async fn store_only_variant_stores_nothing() {
        let memory = MemoryBlobStore::new();
        let config = AppConfig {
            variant: Variant::StoreOnly,
            ..AppConfig::default()
        };
        let state = bootstrap(&config, Arc::new(memory.clone())).await.unwrap();
        assert!(state.input.is_none());
        assert!(memory.is_empty());
    }

    #[tokio::test]
    async fn repeated_bootstrap_reuses_blob_id() {
        let store: Arc<dyn BlobStore> = Arc::new(MemoryBlobStore::new());
        let first = init_input(store.as_ref()).await.unwrap();
        let second = init_input(store.as_ref()).await.unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn memory_backend_connects_without_network() {
        assert!(connect_store(Backend::Memory).is_ok());
    }
}
