//! # Digest Set Archival
//!
//! `POST /store` decodes a [`DigestSet`], archives its JSON encoding on the
//! blob store with the fixed retention, and answers with a
//! [`StatusEnvelope`].
//!
//! ## Outcomes
//!
//! | Situation                  | Status | Body                                  |
//! |----------------------------|--------|---------------------------------------|
//! | stored (new or certified)  | 200    | `{"status":"success","blobId":"…"}`   |
//! | storage failed             | 200    | `{"status":"failure","blobId":""}`    |
//! | body is not a digest set   | 400    | error body, store never called        |
//! | method other than POST     | 405    | `Method not allowed`                  |
//!
//! After a successful store the blob is read back for the logs. The
//! read-back never changes the response.

use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, State};
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::archive;
use crate::error::{method_not_allowed, AppError};
use crate::extractors::parse_json;
use crate::state::AppState;

/// Build the `/store` router.
///
/// Digest sets have no size cap, so the default request body limit is
/// lifted on this route.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/store", post(store_digests).fallback(method_not_allowed))
        .layer(DefaultBodyLimit::disable())
}

// -- Request/Response DTOs ----------------------------------------------------

/// Digest set submitted for archival. Arrays are taken verbatim and may
/// differ in length; an absent or `null` array is treated as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DigestSet {
    #[serde(rename = "digestArr", default, deserialize_with = "null_as_empty")]
    pub digests: Vec<String>,
    #[serde(rename = "partialDensesDigestArr", default, deserialize_with = "null_as_empty")]
    pub partial_dense_digests: Vec<String>,
    #[serde(rename = "versionArr", default, deserialize_with = "null_as_empty")]
    pub versions: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Result of a store attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum StoreStatus {
    Success,
    Failure,
}

/// Response envelope for `POST /store`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusEnvelope {
    pub status: StoreStatus,
    /// Identifier of the stored blob; empty when the store produced none.
    pub blob_id: String,
}

impl StatusEnvelope {
    pub fn success(blob_id: impl Into<String>) -> Self {
        Self {
            status: StoreStatus::Success,
            blob_id: blob_id.into(),
        }
    }

    pub fn failure() -> Self {
        Self {
            status: StoreStatus::Failure,
            blob_id: String::new(),
        }
    }
}

// -- Handler ------------------------------------------------------------------

/// POST /store — Archive a digest set on the blob store.
#[utoipa::path(
    post,
    path = "/store",
    request_body = DigestSet,
    responses(
        (status = 200, description = "Store attempted; see `status`", body = StatusEnvelope),
        (status = 400, description = "Body is not a valid digest set", body = crate::error::ErrorBody),
        (status = 405, description = "Method not allowed"),
    ),
    tag = "store"
)]
pub(crate) async fn store_digests(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<StatusEnvelope>, AppError> {
    let digests: DigestSet = parse_json(&body)?;
    tracing::debug!(
        digests = ?digests.digests,
        partial_dense_digests = ?digests.partial_dense_digests,
        versions = ?digests.versions,
        "received digest set"
    );

    let store = state.store.as_ref();
    let envelope = match archive::archive_json(store, &digests).await {
        Ok(blob_id) => {
            if let Err(e) = archive::read_back(store, &blob_id).await {
                tracing::warn!(error = %e, "diagnostic read-back failed");
            }
            StatusEnvelope::success(blob_id.into_string())
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to archive digest set");
            StatusEnvelope::failure()
        }
    };

    Ok(Json(envelope))
}
