// src/bin/api_server.rs

use collections_api::characters::CharacterClient;
use collections_api::infra::{config, telemetry};
use collections_api::transport;
use collections_api::{CollectionRegistry, CollectionService};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    config::load_env();
    telemetry::init_tracing();

    // --- Collections ---
    let registry = CollectionRegistry::with_defaults();
    for model in registry.models() {
        tracing::info!(
            collection = model.collection_name(),
            "registered collection: {}",
            model.description()
        );
    }

    let data_dir = config::data_dir();
    let service = CollectionService::new(&data_dir, registry);
    service.ensure_directories().await?;
    tracing::info!(root = %data_dir.display(), "storage root ready");

    // --- Character lookup ---
    let characters = CharacterClient::from_env()?;
    tracing::info!(base_url = characters.base_url(), "character lookup configured");

    // --- API Server ---
    let app_state = transport::http::AppState::new(service, characters);
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);
    let app = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()))
        .layer(cors);

    let bind_addr = config::bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("API server listening on http://{}", bind_addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "failed to listen for shutdown signal");
            }
            tracing::info!("shutdown signal received");
        })
        .await?;

    tracing::info!("graceful shutdown complete");
    Ok(())
}
