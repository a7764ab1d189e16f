// ABOUTME: Common test utilities for API integration tests
// ABOUTME: Builds an isolated router per test and drives it without a socket

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tasklist_api::{create_router, DbState};
use tower::ServiceExt;

/// Router backed by a fresh, migrated in-memory database
pub async fn setup_test_app() -> Router {
    let state = DbState::in_memory()
        .await
        .expect("Failed to create in-memory database");
    state
        .init_schema()
        .await
        .expect("Failed to initialize schema");
    create_router(state)
}

/// Send a request with a raw body and return status, content type and body text
pub async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, String, String) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(text) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(text.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (
        status,
        content_type,
        String::from_utf8(bytes.to_vec()).unwrap(),
    )
}

/// Send a JSON request and parse the JSON response
pub async fn send_json(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let body = body.map(|value| value.to_string());
    let (status, _, text) = send_raw(app, method, uri, body.as_deref()).await;
    let value = serde_json::from_str(&text)
        .unwrap_or_else(|e| panic!("response is not JSON ({}): {}", e, text));
    (status, value)
}

/// Ranks of all listed items, in listing order
#[allow(dead_code)]
pub async fn listed_ranks(app: &Router) -> Vec<i64> {
    let (_, items) = send_json(app, Method::GET, "/tasks", None).await;
    items
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["order"].as_i64().unwrap())
        .collect()
}
