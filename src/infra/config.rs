//! Centralized configuration (environment variables + defaults).

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_DATA_DIR: &str = "./data";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_CHARACTER_API_BASE_URL: &str = "https://swapi.dev/api";
pub const DEFAULT_CHARACTER_API_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=info";

/// Loads `.env` if present. Safe to call more than once.
pub fn load_env() {
    dotenv::dotenv().ok();
}

/// Storage root holding one directory per collection.
pub fn data_dir() -> PathBuf {
    std::env::var("DATA_DIR")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
}

/// Address the API server listens on.
pub fn bind_addr() -> String {
    std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
}

/// Base URL of the character lookup service (without trailing `/people/...`).
pub fn character_api_base_url() -> String {
    std::env::var("CHARACTER_API_BASE_URL")
        .unwrap_or_else(|_| DEFAULT_CHARACTER_API_BASE_URL.to_string())
}

/// Request timeout for the character lookup service.
pub fn character_api_timeout() -> Duration {
    let secs = match std::env::var("CHARACTER_API_TIMEOUT_SECS") {
        Ok(v) => parse_secs(&v).unwrap_or_else(|| {
            tracing::warn!(
                value = %v,
                "CHARACTER_API_TIMEOUT_SECS is not a positive integer, using default"
            );
            DEFAULT_CHARACTER_API_TIMEOUT_SECS
        }),
        Err(_) => DEFAULT_CHARACTER_API_TIMEOUT_SECS,
    };
    Duration::from_secs(secs)
}

/// `RUST_LOG`-style filter used when `RUST_LOG` itself is unset.
pub fn log_filter() -> String {
    std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string())
}

fn parse_secs(raw: &str) -> Option<u64> {
    raw.trim().parse::<u64>().ok().filter(|v| *v > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_secs_rejects_zero_and_garbage() {
        assert_eq!(parse_secs(" 30 "), Some(30));
        assert_eq!(parse_secs("0"), None);
        assert_eq!(parse_secs("-1"), None);
        assert_eq!(parse_secs("soon"), None);
    }
}
