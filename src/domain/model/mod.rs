//! Domain model definitions for the served collections.

use crate::storage::record::{Record, RecordStore, StoreError, StoreResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::marker::PhantomData;
use std::sync::Arc;

pub mod examples;
pub mod registry;

pub use examples::{Animal, AnimalsModel, PeopleModel, Person, Tweet, TweetsModel};
pub use registry::CollectionRegistry;

/// Trait that defines the contract for any served collection.
///
/// The store layer is schema-less; a model only names the collection and describes it.
pub trait CollectionModel: Send + Sync {
    /// Collection name. Doubles as the URL segment and the on-disk directory name.
    fn collection_name(&self) -> &str;

    /// One-line human description (startup logs, health output).
    fn description(&self) -> &str;

    /// A representative payload, used by the preflight write probe.
    fn sample_payload(&self) -> JsonValue;
}

/// A typed view over records of one collection.
///
/// Conversions go through serde, so unknown fields are dropped on the way in and
/// missing required fields fail with a serialization error.
pub trait TypedRecord: Serialize + DeserializeOwned + Send + Sync {
    fn to_record(&self) -> StoreResult<Record> {
        match serde_json::to_value(self).map_err(StoreError::Serialize)? {
            JsonValue::Object(map) => Ok(map),
            other => Err(StoreError::Serialize(serde::ser::Error::custom(format!(
                "expected an object, got {}",
                other
            )))),
        }
    }

    fn from_record(record: Record) -> StoreResult<Self> {
        serde_json::from_value(JsonValue::Object(record)).map_err(StoreError::Serialize)
    }
}

/// Typed CRUD on top of any [`RecordStore`].
pub struct TypedCollection<T: TypedRecord> {
    store: Arc<dyn RecordStore>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: TypedRecord> TypedCollection<T> {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            _marker: PhantomData,
        }
    }

    pub async fn create(&self, item: &T) -> StoreResult<T> {
        let stored = self.store.create(item.to_record()?).await?;
        T::from_record(stored)
    }

    pub async fn list(&self) -> StoreResult<Vec<T>> {
        self.store
            .list()
            .await?
            .into_iter()
            .map(T::from_record)
            .collect()
    }

    pub async fn get(&self, id: &str) -> StoreResult<T> {
        T::from_record(self.store.get_by_id(id).await?)
    }

    pub async fn update(&self, id: &str, item: &T) -> StoreResult<T> {
        let stored = self.store.update_by_id(id, item.to_record()?).await?;
        T::from_record(stored)
    }

    pub async fn delete(&self, id: &str) -> StoreResult<u64> {
        self.store.delete_by_id(id).await
    }
}
