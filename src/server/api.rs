//! API route definitions

use std::sync::Arc;
use axum::{
    http::{HeaderValue, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use super::{handlers, state::AppState, ServerConfig};

async fn handle_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": true,
            "message": "Not found. Use POST /predict for predictions or GET /health to check API status.",
        })),
    )
}

async fn handle_405() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({
            "error": true,
            "message": "Method not allowed. Check the API documentation for supported methods.",
        })),
    )
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let permissive = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    match config.cors_origin.as_deref() {
        Some(origin) if !origin.is_empty() && origin != "*" => match origin.parse::<HeaderValue>() {
            Ok(value) => CorsLayer::new()
                .allow_origin(value)
                .allow_methods(Any)
                .allow_headers(Any),
            Err(_) => {
                warn!(origin = %origin, "Invalid CORS_ORIGIN, allowing all origins");
                permissive
            }
        },
        _ => permissive,
    }
}

/// Create the main application router
pub fn create_router(state: Arc<AppState>, config: &ServerConfig) -> Router {
    Router::new()
        .route("/", get(handlers::read_root))
        .route("/predict", post(handlers::predict))
        .route("/health", get(handlers::health_check))
        .route("/model/info", get(handlers::model_info))
        .fallback(handle_404)
        .method_not_allowed_fallback(handle_405)
        .with_state(state)
        .layer(CompressionLayer::new())
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
}
