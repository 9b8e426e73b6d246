pub mod app;
pub mod crypto;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::collection_service::CollectionService;
pub use crypto::ids::new_record_id;
pub use domain::model::{
    Animal, CollectionModel, CollectionRegistry, Person, Tweet, TypedCollection, TypedRecord,
};
pub use infra::characters;
pub use storage::record::{
    record_id, FsRecordStore, Record, RecordStore, StoreError, RECORD_ID_FIELD,
};
