use crate::app::collection_service::CollectionService;
use crate::infra::characters::CharacterClient;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use utoipa::ToSchema;

/// Shared, read-only request state. All mutable state lives on disk.
#[derive(Clone)]
pub struct AppState {
    pub collections: Arc<CollectionService>,
    pub characters: Arc<CharacterClient>,
}

impl AppState {
    pub fn new(collections: CollectionService, characters: CharacterClient) -> Self {
        Self {
            collections: Arc::new(collections),
            characters: Arc::new(characters),
        }
    }
}

/// Envelope for error (and health) responses. Record endpoints return bare records.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<JsonValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

/// A free-form record. `_id` is assigned by the server and ignored on input.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct RecordBody(#[schema(value_type = Object)] pub JsonValue);

#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct DeleteResponse {
    /// Number of records removed: 1 if the id existed, 0 otherwise.
    pub deleted: u64,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub collections: Vec<String>,
}

pub fn json_422(err: JsonRejection, expected: &str) -> (StatusCode, Json<ApiResponse>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ApiResponse::failure(format!(
            "Invalid JSON body: {} (expected: {})",
            err, expected
        ))),
    )
}
