pub mod ids;

pub use ids::{new_record_id, RECORD_ID_BYTES};
