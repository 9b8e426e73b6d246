pub mod client;

pub use client::{Character, CharacterClient, LookupError};
