// Client for the remote character lookup API (SWAPI-compatible `/people/{id}`).

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::time::Duration;
use thiserror::Error;
use utoipa::ToSchema;

use crate::infra::config;

/// The normalized subset of a remote character. Fields missing upstream stay `None`
/// and are left out of the serialized form.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
pub struct Character {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub name: Option<JsonValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub height: Option<JsonValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub mass: Option<JsonValue>,
    #[serde(
        rename = "hairColor",
        alias = "hair_color",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    pub hair_color: Option<JsonValue>,
    #[serde(
        rename = "birthYear",
        alias = "birth_year",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    pub birth_year: Option<JsonValue>,
}

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Character lookup request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Character lookup for id {id} returned {status}")]
    Status { id: u64, status: StatusCode },
}

impl LookupError {
    /// True when the upstream answered 404 for the requested id.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::Status { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}

pub struct CharacterClient {
    http: reqwest::Client,
    base_url: String,
}

impl CharacterClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, LookupError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Client configured from `CHARACTER_API_BASE_URL` / `CHARACTER_API_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, LookupError> {
        Self::new(config::character_api_base_url(), config::character_api_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches character `id` and keeps only the normalized fields.
    /// No retry and no caching: every call goes upstream.
    pub async fn get_character(&self, id: u64) -> Result<Character, LookupError> {
        let url = format!("{}/people/{}", self.base_url, id);
        tracing::debug!(%url, "fetching character");

        let resp = self.http.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(id, %status, "character lookup failed");
            return Err(LookupError::Status { id, status });
        }
        Ok(resp.json::<Character>().await?)
    }
}
