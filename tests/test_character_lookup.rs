//! Character lookup client tests against a local stub of the upstream API.

mod common;

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use collections_api::characters::{Character, CharacterClient, LookupError};
use common::{serve, spawn_app_with_upstream};
use serde_json::{json, Value};
use std::time::Duration;

async fn stub_person(Path(id): Path<u64>) -> impl IntoResponse {
    match id {
        1 => (
            StatusCode::OK,
            Json(json!({
                "name": "Luke Skywalker",
                "height": "172",
                "mass": "77",
                "hair_color": "blond",
                "skin_color": "fair",
                "eye_color": "blue",
                "birth_year": "19BBY",
                "films": ["https://example.invalid/films/1/"]
            })),
        )
            .into_response(),
        // Already camelCase and missing `mass`.
        2 => (
            StatusCode::OK,
            Json(json!({
                "name": "C-3PO",
                "height": "167",
                "hairColor": "n/a",
                "birthYear": "112BBY"
            })),
        )
            .into_response(),
        500 => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
        _ => (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not found" }))).into_response(),
    }
}

async fn spawn_upstream() -> String {
    let router = Router::new().route("/api/people/:id", get(stub_person));
    let (base, _handle) = serve(router).await;
    format!("{}/api", base)
}

fn client(base_url: &str) -> CharacterClient {
    CharacterClient::new(base_url, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn reshapes_the_five_fields() {
    let upstream = spawn_upstream().await;
    let character = client(&upstream).get_character(1).await.unwrap();

    assert_eq!(
        serde_json::to_value(&character).unwrap(),
        json!({
            "name": "Luke Skywalker",
            "height": "172",
            "mass": "77",
            "hairColor": "blond",
            "birthYear": "19BBY"
        })
    );
}

#[tokio::test]
async fn absent_fields_are_omitted() {
    let upstream = spawn_upstream().await;
    let character = client(&upstream).get_character(2).await.unwrap();

    assert_eq!(character.mass, None);
    let value = serde_json::to_value(&character).unwrap();
    assert!(value.get("mass").is_none());
    assert_eq!(value["hairColor"], json!("n/a"));
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_ignored() {
    let upstream = spawn_upstream().await;
    let c = client(&format!("{}/", upstream));
    assert!(!c.base_url().ends_with('/'));
    assert!(c.get_character(1).await.is_ok());
}

#[tokio::test]
async fn non_success_status_is_a_fetch_error() {
    let upstream = spawn_upstream().await;
    let c = client(&upstream);

    let missing = c.get_character(404).await.unwrap_err();
    assert!(missing.is_not_found());

    let broken = c.get_character(500).await.unwrap_err();
    assert!(matches!(
        broken,
        LookupError::Status { id: 500, status } if status == reqwest::StatusCode::INTERNAL_SERVER_ERROR
    ));
    assert!(!broken.is_not_found());
}

#[tokio::test]
async fn unreachable_upstream_is_a_transport_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(&format!("http://{}", addr))
        .get_character(1)
        .await
        .unwrap_err();
    assert!(matches!(err, LookupError::Transport(_)));
}

#[tokio::test]
async fn characters_endpoint_proxies_the_lookup() {
    let upstream = spawn_upstream().await;
    let app = spawn_app_with_upstream(&upstream).await;

    let res = app.client.get(app.url("/characters/1")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Character = res.json().await.unwrap();
    assert_eq!(body.name, Some(json!("Luke Skywalker")));
    assert_eq!(body.birth_year, Some(json!("19BBY")));

    let res = app.client.get(app.url("/characters/404")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = app.client.get(app.url("/characters/500")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["success"], json!(false));

    let res = app.client.get(app.url("/characters/luke")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}
