//! HTTP client for a Walrus publisher/aggregator pair.

use std::time::Duration;

use async_trait::async_trait;

use crate::config::WalrusConfig;
use crate::error::WalrusError;
use crate::types::{BlobId, StoreOptions, StoreResponse};
use crate::BlobStore;

/// Client for the Walrus publisher (writes) and aggregator (reads).
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct WalrusClient {
    http: reqwest::Client,
    publisher_url: url::Url,
    aggregator_url: url::Url,
}

impl WalrusClient {
    /// Create a new Walrus client from configuration.
    pub fn new(config: WalrusConfig) -> Result<Self, WalrusError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().map_err(|e| WalrusError::Http {
            endpoint: "client_init".into(),
            source: e,
        })?;

        Ok(Self {
            http,
            publisher_url: config.publisher_url,
            aggregator_url: config.aggregator_url,
        })
    }

    /// Store raw bytes through the publisher.
    ///
    /// Calls `PUT {publisher}/v1/blobs?epochs={n}`.
    pub async fn store(
        &self,
        payload: Vec<u8>,
        options: StoreOptions,
    ) -> Result<StoreResponse, WalrusError> {
        let endpoint = "PUT /v1/blobs";
        let url = format!("{}/v1/blobs", trim_base(&self.publisher_url));
        let size = payload.len();

        let resp = self
            .http
            .put(&url)
            .query(&[("epochs", options.epochs)])
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .body(payload)
            .send()
            .await
            .map_err(|e| WalrusError::Http {
                endpoint: endpoint.into(),
                source: e,
            })?;

        let body = read_success_body(resp, endpoint).await?;
        let outcome: StoreResponse =
            serde_json::from_slice(&body).map_err(|e| WalrusError::Deserialization {
                endpoint: endpoint.into(),
                source: e,
            })?;

        match &outcome {
            StoreResponse::NewlyCreated(created) => tracing::info!(
                blob_id = %created.blob_object.blob_id,
                cost = created.cost,
                bytes = size,
                epochs = options.epochs,
                "stored new blob"
            ),
            StoreResponse::AlreadyCertified(certified) => tracing::info!(
                blob_id = %certified.blob_id,
                end_epoch = certified.end_epoch,
                bytes = size,
                "blob already certified"
            ),
        }

        Ok(outcome)
    }

    /// Read a blob's bytes through the aggregator.
    ///
    /// Calls `GET {aggregator}/v1/blobs/{blobId}`.
    pub async fn read(&self, blob_id: &BlobId) -> Result<Vec<u8>, WalrusError> {
        let endpoint = "GET /v1/blobs/{blobId}";
        let url = format!("{}/v1/blobs/{}", trim_base(&self.aggregator_url), blob_id);

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| WalrusError::Http {
                endpoint: endpoint.into(),
                source: e,
            })?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(WalrusError::NotFound(blob_id.to_string()));
        }

        let body = read_success_body(resp, endpoint).await?;
        tracing::info!(blob_id = %blob_id, bytes = body.len(), "read blob");
        Ok(body)
    }
}

#[async_trait]
impl BlobStore for WalrusClient {
    async fn store(
        &self,
        payload: Vec<u8>,
        options: StoreOptions,
    ) -> Result<StoreResponse, WalrusError> {
        WalrusClient::store(self, payload, options).await
    }

    async fn read(&self, blob_id: &BlobId) -> Result<Vec<u8>, WalrusError> {
        WalrusClient::read(self, blob_id).await
    }
}

fn trim_base(url: &url::Url) -> &str {
    url.as_str().trim_end_matches('/')
}

/// Map non-2xx responses to [`WalrusError::ApiError`], otherwise return the body.
async fn read_success_body(
    resp: reqwest::Response,
    endpoint: &str,
) -> Result<Vec<u8>, WalrusError> {
    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        return Err(WalrusError::ApiError {
            endpoint: endpoint.into(),
            status,
            body,
        });
    }

    let bytes = resp.bytes().await.map_err(|e| WalrusError::Http {
        endpoint: endpoint.into(),
        source: e,
    })?;
    Ok(bytes.to_vec())
}
