pub mod fs;
pub mod store;

pub use fs::FsRecordStore;
pub use store::{
    is_storable_id, record_id, Record, RecordStore, StoreError, StoreResult, RECORD_ID_FIELD,
};
