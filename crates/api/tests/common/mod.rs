#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use starter_api::config::ServerConfig;
use starter_api::router::build_app_router;
use starter_api::state::AppState;
use starter_db::{MemoryStore, StoreHandle};

/// Build a test `ServerConfig` with both database variables present.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: Some("memory://".to_string()),
        database_name: Some("starter_test".to_string()),
    }
}

/// A fresh, empty in-memory store.
pub fn memory_store() -> StoreHandle {
    Arc::new(MemoryStore::new("starter_test"))
}

/// Build the full application router over `store`, using the same
/// middleware stack as production.
pub fn build_test_app(store: StoreHandle) -> Router {
    build_app_router(AppState {
        store: Some(store),
        config: Arc::new(test_config()),
    })
}

/// Build the application router with no store configured.
pub fn build_app_without_store(config: ServerConfig) -> Router {
    build_app_router(AppState {
        store: None,
        config: Arc::new(config),
    })
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&json).unwrap())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(json)).await
}

pub async fn put_json(app: Router, uri: &str, json: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, Some(json)).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}
