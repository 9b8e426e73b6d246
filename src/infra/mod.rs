pub mod characters;
pub mod config;
pub mod telemetry;
