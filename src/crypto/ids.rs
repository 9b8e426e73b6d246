// Record identifiers: random bytes, hex encoded.

use rand::Rng;

/// Number of random bytes behind every record id (rendered as 24 hex chars).
pub const RECORD_ID_BYTES: usize = 12;

/// Generates a fresh record identifier.
///
/// Ids carry no ordering and are never checked for collisions; 96 random bits keep the
/// probability negligible for a single collection.
pub fn new_record_id() -> String {
    let bytes = rand::thread_rng().gen::<[u8; RECORD_ID_BYTES]>();
    hex::encode(bytes)
}
