#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use croquetas_api::{app, routes::DEFAULT_BODY_LIMIT, AppState, MemoryStore};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

pub fn test_app() -> Router {
    test_app_with_limit(DEFAULT_BODY_LIMIT)
}

pub fn test_app_with_limit(body_limit: usize) -> Router {
    let state = AppState::new(Arc::new(MemoryStore::new()));
    app(state, "tests/no-static-dir", body_limit)
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("response expected");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    if bytes.is_empty() {
        return (status, Value::Null);
    }
    let json = serde_json::from_slice(&bytes).expect("body should be valid JSON");
    (status, json)
}

pub async fn send_json(app: &Router, method: Method, uri: &str, payload: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request should build");
    send(app, request).await
}

pub async fn send_empty(app: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");
    send(app, request).await
}

pub fn croqueta(name: &str, price: &str, recipe_id: i32) -> Value {
    json!({
        "name": name,
        "createdOn": "2024-02-28",
        "price": price,
        "recipeId": recipe_id
    })
}

pub fn assert_error_envelope(body: &Value) {
    assert_eq!(body["ok"], false);
    assert!(body["datos"].is_null());
    assert!(body["mensaje"].is_string());
}
