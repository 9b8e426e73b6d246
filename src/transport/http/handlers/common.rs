use crate::infra::characters::LookupError;
use crate::storage::record::{Record, RecordStore, StoreError};
use crate::transport::http::types::{ApiResponse, AppState};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value as JsonValue;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Collection '{0}' is not registered")]
    UnknownCollection(String),

    #[error("Missing required path parameter '{0}'")]
    MissingParam(&'static str),

    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Lookup(#[from] LookupError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::UnknownCollection(_) => StatusCode::NOT_FOUND,
            ApiError::MissingParam(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Lookup(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            ApiError::Lookup(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, %status, "request rejected");
        }
        (status, Json(ApiResponse::failure(self.to_string()))).into_response()
    }
}

/// Resolves the store for a collection path segment. Names match exactly.
pub fn resolve_store(state: &AppState, collection: &str) -> Result<Arc<dyn RecordStore>, ApiError> {
    state
        .collections
        .store(collection)
        .ok_or_else(|| ApiError::UnknownCollection(collection.to_string()))
}

/// A blank id segment counts as missing, not as an unknown record.
/// Surrounding whitespace is rejected rather than trimmed away.
pub fn require_id(raw: &str) -> Result<&str, ApiError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ApiError::MissingParam("id"));
    }
    if trimmed.len() != raw.len() {
        return Err(ApiError::BadRequest(format!(
            "Record id must not have surrounding whitespace, got '{}'",
            raw
        )));
    }
    Ok(raw)
}

/// Record bodies must be JSON objects.
pub fn require_object(body: JsonValue) -> Result<Record, ApiError> {
    match body {
        JsonValue::Object(map) => Ok(map),
        other => Err(ApiError::BadRequest(format!(
            "Record body must be a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(v: &JsonValue) -> &'static str {
    match v {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "bool",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
