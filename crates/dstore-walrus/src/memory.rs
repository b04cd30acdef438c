//! In-process content-addressed blob store.
//!
//! Mirrors the publisher's idempotence: the first store of some bytes is
//! `NewlyCreated`, every later store of the same bytes is
//! `AlreadyCertified` with the same identifier. Blob ids are the hex
//! SHA-256 of the payload. Nothing is persisted.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use sha2::{Digest, Sha256};

use crate::error::WalrusError;
use crate::types::{
    AlreadyCertified, BlobId, BlobObject, NewlyCreated, StoreOptions, StoreResponse,
};
use crate::BlobStore;

#[derive(Debug, Clone)]
struct StoredBlob {
    bytes: Vec<u8>,
    end_epoch: u64,
}

/// Thread-safe, cloneable in-memory [`BlobStore`].
///
/// The lock is `parking_lot` and is never held across `.await`.
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    blobs: Arc<RwLock<HashMap<BlobId, StoredBlob>>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Identifier this store assigns to `payload`.
    pub fn blob_id_for(payload: &[u8]) -> BlobId {
        BlobId::new(format!("{:x}", Sha256::digest(payload)))
    }

    /// Number of distinct blobs held.
    pub fn len(&self) -> usize {
        self.blobs.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn store(
        &self,
        payload: Vec<u8>,
        options: StoreOptions,
    ) -> Result<StoreResponse, WalrusError> {
        let blob_id = Self::blob_id_for(&payload);
        let mut blobs = self.blobs.write();

        if let Some(existing) = blobs.get(&blob_id) {
            tracing::debug!(blob_id = %blob_id, "memory store: blob already certified");
            return Ok(StoreResponse::AlreadyCertified(AlreadyCertified {
                blob_id,
                end_epoch: existing.end_epoch,
                event: None,
            }));
        }

        let size = payload.len() as u64;
        let end_epoch = u64::from(options.epochs);
        blobs.insert(
            blob_id.clone(),
            StoredBlob {
                bytes: payload,
                end_epoch,
            },
        );
        tracing::debug!(blob_id = %blob_id, bytes = size, "memory store: new blob");

        Ok(StoreResponse::NewlyCreated(NewlyCreated {
            blob_object: BlobObject {
                id: format!("memory:{blob_id}"),
                blob_id,
                size,
                registered_epoch: Some(0),
                certified_epoch: Some(0),
                storage: None,
                deletable: Some(false),
            },
            cost: size,
        }))
    }

    async fn read(&self, blob_id: &BlobId) -> Result<Vec<u8>, WalrusError> {
        self.blobs
            .read()
            .get(blob_id)
            .map(|blob| blob.bytes.clone())
            .ok_or_else(|| WalrusError::NotFound(blob_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn first_store_is_newly_created() {
        let store = MemoryBlobStore::new();
        let resp = store
            .store(b"hello walrus".to_vec(), StoreOptions::default())
            .await
            .unwrap();
        match resp {
            StoreResponse::NewlyCreated(created) => {
                assert_eq!(created.blob_object.size, 12);
                assert_eq!(created.cost, 12);
            }
            other => panic!("expected NewlyCreated, got: {other:?}"),
        }
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn identical_bytes_yield_same_id_already_certified() {
        let store = MemoryBlobStore::new();
        let first = store
            .store(b"same".to_vec(), StoreOptions::default())
            .await
            .unwrap();
        let second = store
            .store(b"same".to_vec(), StoreOptions { epochs: 3 })
            .await
            .unwrap();

        assert_eq!(first.blob_id(), second.blob_id());
        match second {
            StoreResponse::AlreadyCertified(certified) => {
                // Retention of the first write is kept.
                assert_eq!(certified.end_epoch, 10);
            }
            other => panic!("expected AlreadyCertified, got: {other:?}"),
        }
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn different_bytes_yield_different_ids() {
        let store = MemoryBlobStore::new();
        let a = store.store(b"a".to_vec(), StoreOptions::default()).await.unwrap();
        let b = store.store(b"b".to_vec(), StoreOptions::default()).await.unwrap();
        assert_ne!(a.blob_id(), b.blob_id());
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn read_returns_stored_bytes() {
        let store = MemoryBlobStore::new();
        let resp = store
            .store(b"{\"k\":1}".to_vec(), StoreOptions::default())
            .await
            .unwrap();
        let bytes = store.read(resp.blob_id()).await.unwrap();
        assert_eq!(bytes, b"{\"k\":1}");
    }

    #[tokio::test]
    async fn read_unknown_id_is_not_found() {
        let store = MemoryBlobStore::new();
        let err = store.read(&BlobId::new("missing")).await.unwrap_err();
        assert!(matches!(err, WalrusError::NotFound(id) if id == "missing"));
    }

    #[test]
    fn blob_id_is_hex_sha256() {
        let id = MemoryBlobStore::blob_id_for(b"");
        assert_eq!(
            id.as_str(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
