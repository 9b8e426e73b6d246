//! CRUD endpoints shared by every registered collection (`/people`, `/tweets`, `/animals`).

use crate::transport::http::handlers::common::{
    require_id, require_object, resolve_store, ApiError,
};
use crate::transport::http::types::{json_422, AppState, DeleteResponse};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value as JsonValue;

const EXPECTED_BODY: &str = "a JSON object of record fields";

#[utoipa::path(
    post,
    path = "/{collection}",
    params(
        ("collection" = String, Path, description = "Collection name (people, tweets, animals)")
    ),
    request_body = crate::transport::http::types::RecordBody,
    responses(
        (status = 201, description = "Record created", body = crate::transport::http::types::RecordBody),
        (status = 400, description = "Body is not a JSON object", body = crate::transport::http::types::ApiResponse),
        (status = 404, description = "Unknown collection", body = crate::transport::http::types::ApiResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = crate::transport::http::types::ApiResponse),
        (status = 500, description = "Storage error", body = crate::transport::http::types::ApiResponse)
    )
)]
pub async fn create_record_handler(
    State(state): State<AppState>,
    Path(collection): Path<String>,
    request: Result<Json<JsonValue>, JsonRejection>,
) -> Result<Response, ApiError> {
    let store = resolve_store(&state, &collection)?;
    let Json(body) = match request {
        Ok(v) => v,
        Err(e) => return Ok(json_422(e, EXPECTED_BODY).into_response()),
    };
    let fields = require_object(body)?;

    let created = store.create(fields).await?;
    tracing::info!(
        collection = store.collection(),
        id = created.get("_id").and_then(|v| v.as_str()).unwrap_or_default(),
        "record created"
    );
    Ok((StatusCode::CREATED, Json(created)).into_response())
}

#[utoipa::path(
    get,
    path = "/{collection}",
    params(
        ("collection" = String, Path, description = "Collection name (people, tweets, animals)")
    ),
    responses(
        (status = 200, description = "All records, unordered", body = [crate::transport::http::types::RecordBody]),
        (status = 404, description = "Unknown collection", body = crate::transport::http::types::ApiResponse),
        (status = 500, description = "Storage error", body = crate::transport::http::types::ApiResponse)
    )
)]
pub async fn list_records_handler(
    State(state): State<AppState>,
    Path(collection): Path<String>,
) -> Result<Response, ApiError> {
    let store = resolve_store(&state, &collection)?;
    let records = store.list().await?;
    Ok(Json(records).into_response())
}

#[utoipa::path(
    get,
    path = "/{collection}/{id}",
    params(
        ("collection" = String, Path, description = "Collection name (people, tweets, animals)"),
        ("id" = String, Path, description = "Record id")
    ),
    responses(
        (status = 200, description = "The record", body = crate::transport::http::types::RecordBody),
        (status = 400, description = "Missing or malformed id", body = crate::transport::http::types::ApiResponse),
        (status = 404, description = "Unknown collection or record", body = crate::transport::http::types::ApiResponse),
        (status = 500, description = "Storage error", body = crate::transport::http::types::ApiResponse)
    )
)]
pub async fn get_record_handler(
    State(state): State<AppState>,
    Path((collection, id)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    let store = resolve_store(&state, &collection)?;
    let id = require_id(&id)?;
    let record = store.get_by_id(id).await?;
    Ok(Json(record).into_response())
}

#[utoipa::path(
    put,
    path = "/{collection}/{id}",
    params(
        ("collection" = String, Path, description = "Collection name (people, tweets, animals)"),
        ("id" = String, Path, description = "Record id")
    ),
    request_body = crate::transport::http::types::RecordBody,
    responses(
        (status = 200, description = "Record replaced; the id is preserved", body = crate::transport::http::types::RecordBody),
        (status = 400, description = "Missing id or non-object body", body = crate::transport::http::types::ApiResponse),
        (status = 404, description = "Unknown collection or record", body = crate::transport::http::types::ApiResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = crate::transport::http::types::ApiResponse),
        (status = 500, description = "Storage error", body = crate::transport::http::types::ApiResponse)
    )
)]
pub async fn update_record_handler(
    State(state): State<AppState>,
    Path((collection, id)): Path<(String, String)>,
    request: Result<Json<JsonValue>, JsonRejection>,
) -> Result<Response, ApiError> {
    let store = resolve_store(&state, &collection)?;
    let id = require_id(&id)?;
    let Json(body) = match request {
        Ok(v) => v,
        Err(e) => return Ok(json_422(e, EXPECTED_BODY).into_response()),
    };
    let fields = require_object(body)?;

    let updated = store.update_by_id(id, fields).await?;
    tracing::info!(collection = store.collection(), id, "record updated");
    Ok(Json(updated).into_response())
}

#[utoipa::path(
    delete,
    path = "/{collection}/{id}",
    params(
        ("collection" = String, Path, description = "Collection name (people, tweets, animals)"),
        ("id" = String, Path, description = "Record id")
    ),
    responses(
        (status = 200, description = "Delete count (0 when the record did not exist)", body = DeleteResponse),
        (status = 400, description = "Missing or malformed id", body = crate::transport::http::types::ApiResponse),
        (status = 404, description = "Unknown collection", body = crate::transport::http::types::ApiResponse),
        (status = 500, description = "Storage error", body = crate::transport::http::types::ApiResponse)
    )
)]
pub async fn delete_record_handler(
    State(state): State<AppState>,
    Path((collection, id)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    let store = resolve_store(&state, &collection)?;
    let id = require_id(&id)?;
    let deleted = store.delete_by_id(id).await?;
    tracing::info!(collection = store.collection(), id, deleted, "record delete");
    Ok(Json(DeleteResponse { deleted }).into_response())
}

/// `PUT /{collection}` and `DELETE /{collection}`: the id segment is required.
pub async fn missing_id_handler(
    State(state): State<AppState>,
    Path(collection): Path<String>,
) -> Result<Response, ApiError> {
    resolve_store(&state, &collection)?;
    Err(ApiError::MissingParam("id"))
}
