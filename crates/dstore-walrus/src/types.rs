//! Types matching the Walrus publisher/aggregator HTTP schemas.

use serde::{Deserialize, Serialize};

/// Retention applied to every store unless the caller says otherwise.
pub const DEFAULT_EPOCHS: u32 = 10;

/// Opaque content-addressed blob identifier assigned by Walrus.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlobId(String);

impl BlobId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for BlobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for BlobId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for BlobId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Per-call store options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreOptions {
    /// Number of epochs the network must keep the blob retrievable.
    pub epochs: u32,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            epochs: DEFAULT_EPOCHS,
        }
    }
}

// -- Store outcome --------------------------------------------------------------

/// Outcome of a publisher store call.
///
/// Walrus encodes this as an externally tagged object, e.g.
/// `{"newlyCreated": {...}}` or `{"alreadyCertified": {...}}`. Any other
/// tag fails deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StoreResponse {
    /// The payload was not on the network and a new blob was registered.
    NewlyCreated(NewlyCreated),
    /// Identical content is already certified; its identifier is returned.
    AlreadyCertified(AlreadyCertified),
}

impl StoreResponse {
    /// The identifier of the stored blob, whichever way it was stored.
    pub fn blob_id(&self) -> &BlobId {
        match self {
            Self::NewlyCreated(created) => &created.blob_object.blob_id,
            Self::AlreadyCertified(certified) => &certified.blob_id,
        }
    }

    /// Consume the response, keeping only the identifier.
    pub fn into_blob_id(self) -> BlobId {
        match self {
            Self::NewlyCreated(created) => created.blob_object.blob_id,
            Self::AlreadyCertified(certified) => certified.blob_id,
        }
    }
}

/// Payload of [`StoreResponse::NewlyCreated`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewlyCreated {
    pub blob_object: BlobObject,
    /// Storage cost charged for the write, in MIST.
    pub cost: u64,
}

/// On-chain blob object registered for a newly created blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlobObject {
    /// Sui object id of the blob.
    pub id: String,
    pub blob_id: BlobId,
    /// Unencoded size in bytes.
    pub size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registered_epoch: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certified_epoch: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageResource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deletable: Option<bool>,
}

/// Storage reservation backing a blob object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageResource {
    pub id: String,
    pub start_epoch: u64,
    pub end_epoch: u64,
    pub storage_size: u64,
}

/// Payload of [`StoreResponse::AlreadyCertified`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlreadyCertified {
    pub blob_id: BlobId,
    /// Epoch until which the existing blob stays available.
    pub end_epoch: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<EventId>,
}

/// Sui event that certified an existing blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventId {
    pub tx_digest: String,
    pub event_seq: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_options_default_to_ten_epochs() {
        assert_eq!(StoreOptions::default().epochs, 10);
    }

    #[test]
    fn decodes_newly_created() {
        let body = serde_json::json!({
            "newlyCreated": {
                "blobObject": {
                    "id": "0xe91eee8c5b6f35b9a250cfc29e30f0d9e5463a21fd8d1ddb0fc22d44db4eac50",
                    "registeredEpoch": 34,
                    "blobId": "M4hsZGQ1oCktdzegB6HnI6Mi28S2nqOPHxK-W7_4BUk",
                    "size": 17,
                    "encodingType": "RS2",
                    "certifiedEpoch": 34,
                    "storage": {
                        "id": "0x4748cd83217b5ce7aa77e7f1ad6fc5f7f694e26a157381b9391ac65c47815faf",
                        "startEpoch": 34,
                        "endEpoch": 44,
                        "storageSize": 66034000
                    },
                    "deletable": false
                },
                "resourceOperation": {"registerFromScratch": {"encodedLength": 66034000, "epochsAhead": 10}},
                "cost": 132300
            }
        });

        let resp: StoreResponse = serde_json::from_value(body).unwrap();
        match &resp {
            StoreResponse::NewlyCreated(created) => {
                assert_eq!(created.cost, 132300);
                assert_eq!(created.blob_object.size, 17);
                assert_eq!(created.blob_object.storage.as_ref().unwrap().end_epoch, 44);
            }
            other => panic!("expected NewlyCreated, got: {other:?}"),
        }
        assert_eq!(
            resp.blob_id().as_str(),
            "M4hsZGQ1oCktdzegB6HnI6Mi28S2nqOPHxK-W7_4BUk"
        );
    }

    #[test]
    fn decodes_already_certified() {
        let body = serde_json::json!({
            "alreadyCertified": {
                "blobId": "M4hsZGQ1oCktdzegB6HnI6Mi28S2nqOPHxK-W7_4BUk",
                "event": {
                    "txDigest": "4XQHFa9S324wTzYHF3vsBSwpUZuLpmwTHYMFv9nsttSs",
                    "eventSeq": "0"
                },
                "endEpoch": 44
            }
        });

        let resp: StoreResponse = serde_json::from_value(body).unwrap();
        match &resp {
            StoreResponse::AlreadyCertified(certified) => {
                assert_eq!(certified.end_epoch, 44);
                assert_eq!(certified.event.as_ref().unwrap().event_seq, "0");
            }
            other => panic!("expected AlreadyCertified, got: {other:?}"),
        }
        assert_eq!(
            resp.into_blob_id(),
            BlobId::new("M4hsZGQ1oCktdzegB6HnI6Mi28S2nqOPHxK-W7_4BUk")
        );
    }

    #[test]
    fn rejects_unknown_outcome() {
        let body = serde_json::json!({"markedInvalid": {"blobId": "x"}});
        assert!(serde_json::from_value::<StoreResponse>(body).is_err());
    }

    #[test]
    fn rejects_both_outcomes_at_once() {
        let body = serde_json::json!({
            "newlyCreated": {"blobObject": {"id": "0x1", "blobId": "a", "size": 1}, "cost": 1},
            "alreadyCertified": {"blobId": "a", "endEpoch": 2}
        });
        assert!(serde_json::from_value::<StoreResponse>(body).is_err());
    }

    #[test]
    fn blob_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&BlobId::new("abc123njm")).unwrap();
        assert_eq!(json, "\"abc123njm\"");
    }
}
