//! # Blob Archival
//!
//! The one call sequence every write in this service goes through:
//! encode a value as JSON, store the bytes with the fixed retention, and
//! pull the identifier out of whichever store outcome came back.
//!
//! [`read_back`] fetches a blob again and logs its contents. It exists for
//! operator diagnostics only.

use dstore_walrus::{BlobId, BlobStore, StoreOptions, StoreResponse, WalrusError};
use serde::Serialize;

/// Retention, in epochs, applied to every blob this service writes.
pub const RETENTION_EPOCHS: u32 = dstore_walrus::types::DEFAULT_EPOCHS;

/// Errors from the archival sequence.
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("failed to encode payload as JSON: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to store blob: {0}")]
    Store(#[source] WalrusError),

    #[error("failed to read back blob {blob_id}: {source}")]
    Read {
        blob_id: BlobId,
        #[source]
        source: WalrusError,
    },
}

/// Encode `value` as JSON and store it, returning the blob identifier.
pub async fn archive_json<T>(store: &dyn BlobStore, value: &T) -> Result<BlobId, ArchiveError>
where
    T: Serialize + Sync + ?Sized,
{
    let payload = serde_json::to_vec(value)?;
    let outcome = store
        .store(payload, StoreOptions::default())
        .await
        .map_err(ArchiveError::Store)?;

    match &outcome {
        StoreResponse::NewlyCreated(created) => tracing::info!(
            blob_id = %created.blob_object.blob_id,
            cost = created.cost,
            "archived as new blob"
        ),
        StoreResponse::AlreadyCertified(certified) => tracing::info!(
            blob_id = %certified.blob_id,
            end_epoch = certified.end_epoch,
            "archived content already certified"
        ),
    }

    Ok(outcome.into_blob_id())
}

/// Fetch a stored blob and log what came back.
pub async fn read_back(store: &dyn BlobStore, blob_id: &BlobId) -> Result<Vec<u8>, ArchiveError> {
    let bytes = store
        .read(blob_id)
        .await
        .map_err(|source| ArchiveError::Read {
            blob_id: blob_id.clone(),
            source,
        })?;
    tracing::debug!(
        blob_id = %blob_id,
        data = %String::from_utf8_lossy(&bytes),
        "read back blob"
    );
    Ok(bytes)
}
