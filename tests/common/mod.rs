//! Shared helpers for integration tests
#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use heart_risk::inference::RiskPredictor;
use heart_risk::server::{create_router, AppState, ServerConfig};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tower::ServiceExt;

/// Artifacts shipped with the repository
pub fn models_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("models")
}

pub fn test_config(models_dir: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        models_dir: models_dir.to_path_buf(),
        preprocessor_path: None,
        classifier_path: None,
        cors_origin: None,
    }
}

pub fn app_for(models_dir: &Path) -> axum::Router {
    let config = test_config(models_dir);
    let predictor = RiskPredictor::load(config.inference_config()).unwrap();
    let state = Arc::new(AppState::new(config.clone(), predictor));
    create_router(state, &config)
}

pub fn shipped_app() -> axum::Router {
    app_for(&models_dir())
}

/// Copy of the shipped artifacts as editable JSON: (preprocessor, classifier)
pub fn shipped_artifacts() -> (Value, Value) {
    let read = |name: &str| -> Value {
        let raw = std::fs::read_to_string(models_dir().join(name)).unwrap();
        serde_json::from_str(&raw).unwrap()
    };
    (read("preprocessor.json"), read("classifier.json"))
}

pub fn write_artifacts(dir: &Path, preprocessor: &Value, classifier: &Value) {
    std::fs::write(
        dir.join("preprocessor.json"),
        serde_json::to_string_pretty(preprocessor).unwrap(),
    )
    .unwrap();
    std::fs::write(
        dir.join("classifier.json"),
        serde_json::to_string_pretty(classifier).unwrap(),
    )
    .unwrap();
}

pub fn example_body() -> Value {
    json!({
        "age": 55,
        "sex": "Male",
        "cp": "non-anginal",
        "trestbps": 120.0,
        "chol": 230.0,
        "fbs": false,
        "exang": true,
        "restecg": "normal",
    })
}

pub async fn get(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn post_json(app: axum::Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: axum::Router, uri: &str, body: String) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn send(app: axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 64).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
