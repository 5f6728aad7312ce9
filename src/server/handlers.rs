//! HTTP request handlers

use std::sync::Arc;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;

use crate::feature_engineering::PatientInput;
use crate::inference::{ModelSummary, PredictionResponse};

use super::error::Result;
use super::state::AppState;

pub const API_TITLE: &str = "Heart Disease Prediction API";
pub const API_DESCRIPTION: &str =
    "Predict heart disease likelihood based on user-inputtable medical metrics.";
pub const WELCOME_MESSAGE: &str =
    "Welcome to the Heart Disease Prediction API. Use the /predict endpoint to get predictions.";

// ============================================================================
// Welcome
// ============================================================================

pub async fn read_root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": WELCOME_MESSAGE,
    }))
}

// ============================================================================
// Prediction
// ============================================================================

pub async fn predict(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<PatientInput>, JsonRejection>,
) -> Result<Json<PredictionResponse>> {
    let Json(input) = payload?;
    let response = state.predictor.predict(input)?;
    Ok(Json(response))
}

// ============================================================================
// System Handlers
// ============================================================================

pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let preprocessor = state.predictor.preprocessor();
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "uptime_secs": state.uptime_secs(),
        "model": {
            "models_dir": state.config.models_dir.display().to_string(),
            "n_features_in": preprocessor.feature_names_in().len(),
            "n_encoded_features": preprocessor.n_features_out(),
        },
    }))
}

#[derive(Serialize)]
pub struct ModelInfo {
    title: &'static str,
    description: &'static str,
    version: &'static str,
    classification_threshold: f64,
    #[serde(flatten)]
    summary: ModelSummary,
}

pub async fn model_info(State(state): State<Arc<AppState>>) -> Json<ModelInfo> {
    Json(ModelInfo {
        title: API_TITLE,
        description: API_DESCRIPTION,
        version: env!("CARGO_PKG_VERSION"),
        classification_threshold: state.predictor.config().classification_threshold,
        summary: state.predictor.summary(),
    })
}
