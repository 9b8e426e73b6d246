use crate::transport::http::types::{ApiResponse, AppState, HealthResponse};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy (storage root usable)", body = HealthResponse),
        (status = 503, description = "Service is unhealthy (storage root unusable)", body = ApiResponse)
    )
)]
pub async fn healthcheck_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.collections.check_storage().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok".to_string(),
                collections: state.collections.collections(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "storage health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ApiResponse {
                    success: false,
                    data: Some(serde_json::json!({ "status": "unhealthy" })),
                    error: Some(format!("Storage check failed: {}", e)),
                }),
            )
                .into_response()
        }
    }
}
