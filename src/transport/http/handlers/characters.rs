use crate::infra::characters::Character;
use crate::transport::http::handlers::common::ApiError;
use crate::transport::http::types::AppState;
use axum::extract::{Path, State};
use axum::Json;

#[utoipa::path(
    get,
    path = "/characters/{id}",
    params(
        ("id" = u64, Path, description = "Numeric character id on the upstream service")
    ),
    responses(
        (status = 200, description = "Normalized character", body = Character),
        (status = 400, description = "Id is not numeric", body = crate::transport::http::types::ApiResponse),
        (status = 404, description = "Upstream has no such character", body = crate::transport::http::types::ApiResponse),
        (status = 502, description = "Upstream request failed", body = crate::transport::http::types::ApiResponse)
    )
)]
pub async fn get_character_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Character>, ApiError> {
    let id = id
        .trim()
        .parse::<u64>()
        .map_err(|_| ApiError::BadRequest(format!("Character id must be numeric, got '{}'", id)))?;
    let character = state.characters.get_character(id).await?;
    Ok(Json(character))
}
