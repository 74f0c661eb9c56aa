#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use notekeeper_api::config::{LogFormat, ServerConfig, StoreBackend};
use notekeeper_api::router::build_app_router;
use notekeeper_api::state::AppState;
use notekeeper_db::MemoryStore;
use serde_json::{json, Value};
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        store_backend: StoreBackend::Memory,
        database_url: None,
        db_max_connections: 1,
        log_format: LogFormat::Pretty,
    }
}

/// A fresh, empty in-memory store shared by every app built from it.
pub fn test_store() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::new())
}

/// Build the full application router over `store`, with the same middleware
/// stack production uses.
pub fn build_test_app(store: Arc<MemoryStore>) -> Router {
    let config = test_config();
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config).unwrap()
}

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Body,
    content_type: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, Body::empty(), None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Body::empty(), None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(
        app,
        Method::POST,
        uri,
        Body::from(body.to_string()),
        Some("application/json"),
    )
    .await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(
        app,
        Method::PUT,
        uri,
        Body::from(body.to_string()),
        Some("application/json"),
    )
    .await
}

pub async fn put_text(app: Router, uri: &str, body: &str) -> Response<Body> {
    send(
        app,
        Method::PUT,
        uri,
        Body::from(body.to_string()),
        Some("text/plain"),
    )
    .await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as raw bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

// ---------------------------------------------------------------------------
// Seeding helpers (go through the HTTP surface)
// ---------------------------------------------------------------------------

/// Register a user and return its id.
pub async fn seed_user(store: &Arc<MemoryStore>, username: &str) -> i64 {
    let app = build_test_app(store.clone());
    let response = post_json(
        app,
        "/user/register",
        json!({
            "username": username,
            "email": format!("{username}@example.com"),
            "password": "p4ss!word",
        }),
    )
    .await;
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// Create a category and return its id.
pub async fn seed_category(store: &Arc<MemoryStore>, user_id: i64, name: &str) -> i64 {
    let app = build_test_app(store.clone());
    let response = post_json(app, "/category", json!({"name": name, "userId": user_id})).await;
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// Create a note and return its id.
pub async fn seed_note(
    store: &Arc<MemoryStore>,
    user_id: i64,
    category_id: i64,
    title: &str,
) -> i64 {
    let app = build_test_app(store.clone());
    let response = post_json(
        app,
        "/note",
        json!({
            "title": title,
            "body": "milk",
            "userId": user_id,
            "categoryId": category_id,
        }),
    )
    .await;
    body_json(response).await["data"]["id"].as_i64().unwrap()
}
