//! # Body Decoding
//!
//! Request bodies are decoded from raw bytes rather than through
//! `axum::Json`, so a missing or unusual `Content-Type` header does not
//! turn into a 415. Any JSON that fails to decode is a 400.

use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Decode a JSON request body, mapping failures to [`AppError::BadRequest`].
pub fn parse_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| AppError::BadRequest(format!("Invalid JSON: {e}")))
}
