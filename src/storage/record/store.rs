//! Storage contract shared by every collection.
//!
//! A record is a free-form JSON object that always carries the server-assigned `_id`.
//! Implementations own one collection each; the HTTP layer never touches files directly.

use async_trait::async_trait;
use serde_json::{Map, Value as JsonValue};
use thiserror::Error;

/// Field holding the system-assigned identifier.
pub const RECORD_ID_FIELD: &str = "_id";

/// Longest identifier accepted from callers.
const MAX_RECORD_ID_LEN: usize = 128;

/// A stored record: field name -> JSON value.
pub type Record = Map<String, JsonValue>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Record '{0}' not found")]
    NotFound(String),

    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt record file {path}: {source}")]
    Corrupt {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize record: {0}")]
    Serialize(#[source] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// CRUD over a single named collection.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Name of the collection this store is scoped to.
    fn collection(&self) -> &str;

    /// Assigns a fresh id, merges it into `fields` and persists the result.
    /// A caller-supplied `_id` is overwritten.
    async fn create(&self, fields: Record) -> StoreResult<Record>;

    /// Every stored record, in no particular order.
    /// A collection with no records (or no backing storage yet) yields an empty list.
    async fn list(&self) -> StoreResult<Vec<Record>>;

    async fn get_by_id(&self, id: &str) -> StoreResult<Record>;

    /// Replaces the stored fields of `id` with `fields`, keeping the original id.
    async fn update_by_id(&self, id: &str, fields: Record) -> StoreResult<Record>;

    /// Removes `id` and returns how many records were removed (0 or 1).
    /// Deleting an absent record is not an error.
    async fn delete_by_id(&self, id: &str) -> StoreResult<u64>;
}

/// Reads the `_id` of a record, if it carries a string one.
pub fn record_id(record: &Record) -> Option<&str> {
    record.get(RECORD_ID_FIELD).and_then(|v| v.as_str())
}

/// Ids double as file names, so only `[A-Za-z0-9_-]{1,128}` can ever be stored.
/// Anything else names a record that cannot exist.
pub fn is_storable_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= MAX_RECORD_ID_LEN
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ids_that_could_escape_the_collection_are_not_storable() {
        for bad in ["", ".", "..", "../people", "a/b", "a\\b", "x.json", "with space"] {
            assert!(!is_storable_id(bad), "expected {:?} to be unstorable", bad);
        }
        assert!(!is_storable_id(&"a".repeat(MAX_RECORD_ID_LEN + 1)));
    }

    #[test]
    fn accepts_generated_and_legacy_ids() {
        assert!(is_storable_id(&crate::crypto::new_record_id()));
        assert!(is_storable_id("HJx9_k-2f"));
    }

    #[test]
    fn record_id_only_reads_strings() {
        let with_id = json!({ "_id": "abc", "name": "x" });
        let numeric = json!({ "_id": 7 });
        assert_eq!(record_id(with_id.as_object().unwrap()), Some("abc"));
        assert_eq!(record_id(numeric.as_object().unwrap()), None);
    }
}
