use crate::infra::characters::Character;
use crate::transport::http::handlers::{characters, collections, health};
use crate::transport::http::types::{ApiResponse, DeleteResponse, HealthResponse, RecordBody};
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        characters::get_character_handler,
        collections::create_record_handler,
        collections::list_records_handler,
        collections::get_record_handler,
        collections::update_record_handler,
        collections::delete_record_handler
    ),
    components(schemas(
        ApiResponse,
        RecordBody,
        DeleteResponse,
        HealthResponse,
        Character,
        crate::domain::model::Person,
        crate::domain::model::Tweet,
        crate::domain::model::Animal
    ))
)]
pub struct ApiDoc;

/// Static routes (`/health`, `/characters/...`) take precedence over the collection segment.
pub fn create_router(app_state: crate::transport::http::types::AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route("/characters/:id", get(characters::get_character_handler))
        .route(
            "/:collection",
            get(collections::list_records_handler)
                .post(collections::create_record_handler)
                .put(collections::missing_id_handler)
                .delete(collections::missing_id_handler),
        )
        .route(
            "/:collection/:id",
            get(collections::get_record_handler)
                .put(collections::update_record_handler)
                .delete(collections::delete_record_handler),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
