//! # Startup Input
//!
//! The fixed numeric input stored once at startup in the `with-input`
//! variant. It is a pair of 49-element vectors, magnitudes and signs,
//! encoded as `{"inputMag": [...], "inputSign": [...]}`. The values are
//! opaque constants.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Number of elements in each input vector.
pub const INPUT_LEN: usize = 49;

/// Magnitude component of the startup input.
pub const INPUT_MAG: [u64; INPUT_LEN] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 79, 44, 0, 0, 0, 0, 4, 89, 0, 0, 0, 0, 0, 59, 92, 43, 0, 0, 0,
    0, 49, 89, 90, 30, 0, 0, 0, 0, 61, 81, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

/// Sign component of the startup input.
pub const INPUT_SIGN: [u64; INPUT_LEN] = [0; INPUT_LEN];

/// The bytes that get stored: the two vectors, without an identifier.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputPayload<'a> {
    pub input_mag: &'a [u64],
    pub input_sign: &'a [u64],
}

impl InputPayload<'static> {
    /// The fixed startup payload.
    pub fn fixed() -> Self {
        Self {
            input_mag: &INPUT_MAG,
            input_sign: &INPUT_SIGN,
        }
    }
}

/// Startup input together with the blob it was stored as.
///
/// Built once before the server accepts connections and shared read-only
/// through [`crate::state::AppState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CachedInput {
    pub blob_id: String,
    pub input_mag: Vec<u64>,
    pub input_sign: Vec<u64>,
}

impl CachedInput {
    /// Pair a stored payload with its blob identifier.
    pub fn new(blob_id: impl Into<String>, payload: &InputPayload<'_>) -> Self {
        Self {
            blob_id: blob_id.into(),
            input_mag: payload.input_mag.to_vec(),
            input_sign: payload.input_sign.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_payload_has_expected_shape() {
        let payload = InputPayload::fixed();
        assert_eq!(payload.input_mag.len(), 49);
        assert_eq!(payload.input_sign.len(), 49);
        assert_eq!(&payload.input_mag[..13], &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 79, 44, 0]);
        assert!(payload.input_sign.iter().all(|&s| s == 0));
    }

    #[test]
    fn payload_encodes_without_blob_id() {
        let json = serde_json::to_value(InputPayload::fixed()).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj["inputMag"].as_array().unwrap().len(), 49);
        assert_eq!(obj["inputSign"].as_array().unwrap().len(), 49);
    }

    #[test]
    fn cached_input_encodes_in_camel_case() {
        let cached = CachedInput::new("blob-1", &InputPayload::fixed());
        let json = serde_json::to_string(&cached).unwrap();
        assert!(json.starts_with(r#"{"blobId":"blob-1","inputMag":[0,0,0,0,0,0,0,0,0,0,79,44,"#));
        assert!(json.contains(r#""inputSign":[0,"#));
    }
}
