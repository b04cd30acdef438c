//! # dstore-walrus -- Typed Rust client for the Walrus blob store
//!
//! Walrus exposes two HTTP roles:
//! - **Publisher** accepts writes: `PUT /v1/blobs?epochs={n}` with the raw
//!   payload as the request body.
//! - **Aggregator** serves reads: `GET /v1/blobs/{blobId}`.
//!
//! Walrus is content-addressed. Storing bytes that are already certified
//! does not create a new blob; the publisher answers with the existing
//! identifier instead. Both outcomes are modelled by [`StoreResponse`].
//!
//! ## Architecture
//!
//! [`BlobStore`] is the seam the API layer depends on. Two implementations
//! ship with this crate:
//!
//! | Type | Backing |
//! |------|---------|
//! | [`WalrusClient`] | live publisher/aggregator over HTTP |
//! | [`MemoryBlobStore`] | in-process map keyed by SHA-256 of the payload |

pub mod client;
pub mod config;
pub mod error;
pub mod memory;
pub mod types;

pub use client::WalrusClient;
pub use config::WalrusConfig;
pub use error::WalrusError;
pub use memory::MemoryBlobStore;
pub use types::{AlreadyCertified, BlobId, BlobObject, NewlyCreated, StoreOptions, StoreResponse};

use async_trait::async_trait;

/// Storage operations against a content-addressed blob network.
///
/// Implementations serialize nothing themselves: callers hand over the
/// exact bytes to persist.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Store `payload` for `options.epochs` epochs.
    async fn store(
        &self,
        payload: Vec<u8>,
        options: StoreOptions,
    ) -> Result<StoreResponse, WalrusError>;

    /// Read back the bytes of a previously stored blob.
    async fn read(&self, blob_id: &BlobId) -> Result<Vec<u8>, WalrusError>;
}
