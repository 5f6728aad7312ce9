//! Error types for the server

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::error::HeartRiskError;

#[derive(Error, Debug)]
pub enum ServerError {
    /// Request body failed schema validation
    #[error("Invalid request: {message}")]
    InvalidRequest { status: StatusCode, message: String },

    #[error("Prediction error: {0}")]
    Prediction(#[from] HeartRiskError),
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        ServerError::InvalidRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ServerError::InvalidRequest { status, message } => {
                tracing::debug!(status = %status, detail = %message, "Rejected request body");
                (*status, message.clone())
            }
            ServerError::Prediction(HeartRiskError::InvalidInput(message)) => {
                tracing::debug!(detail = %message, "Rejected request values");
                (StatusCode::UNPROCESSABLE_ENTITY, message.clone())
            }
            ServerError::Prediction(e) => {
                tracing::error!(detail = %e, "Prediction failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Prediction failed. Check server logs for details.".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": true,
            "message": message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ServerError>;
