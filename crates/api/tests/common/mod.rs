use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use badgeboard_api::config::ServerConfig;
use badgeboard_api::router::build_app_router;
use badgeboard_api::state::AppState;
use badgeboard_core::badge::BadgeStore;
use badgeboard_registry::{InMemoryRegistry, RegistryDocument};

/// Directory holding the repo's badge assets, resolved relative to this
/// crate so tests run from any working directory.
pub fn asset_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../assets")
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        asset_dir: asset_dir(),
        registry_file: PathBuf::from("registry.json"),
    }
}

/// Registry fixture used across the integration tests:
///
/// - `free1` — public, aggregate status `failure`, build 5 succeeded.
/// - `internal` — private, viewable only with the `team-token` bearer token.
pub fn fixture_registry() -> InMemoryRegistry {
    let json = r#"{
        "jobs": [
            {
                "name": "free1",
                "status": "failure",
                "builds": [ { "number": 5, "status": "success" } ]
            },
            {
                "name": "internal",
                "status": "success",
                "public": false,
                "viewers": ["team-token"]
            }
        ]
    }"#;

    let doc: RegistryDocument = serde_json::from_str(json).unwrap();
    InMemoryRegistry::from_document(doc).unwrap()
}

/// Build the full application router with all middleware layers.
///
/// Mirrors the router construction in `main.rs` (via the shared
/// `build_app_router`) so integration tests exercise the same middleware
/// stack that production uses.
pub fn build_test_app() -> Router {
    let config = test_config();

    let state = AppState {
        registry: Arc::new(fixture_registry()),
        badges: Arc::new(BadgeStore::load_from_dir(&config.asset_dir).unwrap()),
        config: Arc::new(config.clone()),
    };

    build_app_router(state, &config)
}

/// Issue a GET request against the app.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Issue a GET request carrying a bearer token.
pub async fn get_with_token(app: Router, uri: &str, token: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect the full response body.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// Collect the response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Assert status and return the parsed JSON error body.
pub async fn assert_error(response: Response<Body>, status: StatusCode, code: &str) {
    assert_eq!(response.status(), status);
    let json = body_json(response).await;
    assert_eq!(json["code"], code);
    assert!(json["error"].is_string());
}
