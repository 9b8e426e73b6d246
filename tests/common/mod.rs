#![allow(dead_code)]

use axum::Router;
use collections_api::characters::CharacterClient;
use collections_api::transport;
use collections_api::{CollectionRegistry, CollectionService};
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;
use tokio::task::JoinHandle;

/// A running API server backed by its own temporary storage root.
pub struct TestApp {
    pub base_url: String,
    pub client: reqwest::Client,
    pub data_dir: TempDir,
    server: JoinHandle<()>,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn data_path(&self) -> &Path {
        self.data_dir.path()
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        self.server.abort();
    }
}

/// Serves `router` on an ephemeral localhost port. The listener is bound before
/// returning, so the server accepts connections immediately.
pub async fn serve(router: Router) -> (String, JoinHandle<()>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    (format!("http://{}", addr), handle)
}

/// Starts the API with fresh collection directories and the character client pointed
/// at `character_api` (an unroutable address when the test does not need it).
pub async fn spawn_app_with_upstream(character_api: &str) -> TestApp {
    let data_dir = tempfile::tempdir().unwrap();
    let service = CollectionService::new(data_dir.path(), CollectionRegistry::with_defaults());
    service.ensure_directories().await.unwrap();
    let characters = CharacterClient::new(character_api, Duration::from_secs(5)).unwrap();

    let state = transport::http::AppState::new(service, characters);
    let (base_url, server) = serve(transport::http::create_router(state)).await;

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap();
    TestApp {
        base_url,
        client,
        data_dir,
        server,
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with_upstream("http://127.0.0.1:9").await
}
