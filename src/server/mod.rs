//! Heart Risk Server Module
//!
//! HTTP surface of the prediction service: a welcome route, the prediction
//! route, and health/model introspection routes.

mod api;
mod error;
mod handlers;
mod state;

pub use api::create_router;
pub use error::ServerError;
pub use handlers::{API_DESCRIPTION, API_TITLE, WELCOME_MESSAGE};
pub use state::AppState;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

use crate::inference::{InferenceConfig, RiskPredictor, CLASSIFIER_FILE, PREPROCESSOR_FILE};

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub models_dir: PathBuf,
    /// Overrides `<models_dir>/preprocessor.json`
    pub preprocessor_path: Option<PathBuf>,
    /// Overrides `<models_dir>/classifier.json`
    pub classifier_path: Option<PathBuf>,
    /// Single allowed origin; all origins when unset or `*`
    pub cors_origin: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: std::env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("API_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(7860),
            models_dir: std::env::var("MODELS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./models")),
            preprocessor_path: std::env::var("PREPROCESSOR_PATH").ok().map(PathBuf::from),
            classifier_path: std::env::var("CLASSIFIER_PATH").ok().map(PathBuf::from),
            cors_origin: std::env::var("CORS_ORIGIN").ok(),
        }
    }
}

impl ServerConfig {
    /// Artifact locations and inference settings derived from this config
    pub fn inference_config(&self) -> InferenceConfig {
        InferenceConfig::from_models_dir(&self.models_dir)
            .with_preprocessor_path(
                self.preprocessor_path
                    .clone()
                    .unwrap_or_else(|| self.models_dir.join(PREPROCESSOR_FILE)),
            )
            .with_classifier_path(
                self.classifier_path
                    .clone()
                    .unwrap_or_else(|| self.models_dir.join(CLASSIFIER_FILE)),
            )
    }
}

/// Load the artifacts and serve until ctrl+c.
///
/// Artifact load failures abort before the listener is bound.
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let start_time = chrono::Utc::now();
    let inference_config = config.inference_config();
    info!(
        preprocessor = %inference_config.preprocessor_path.display(),
        classifier = %inference_config.classifier_path.display(),
        "Loading model artifacts"
    );

    let predictor = RiskPredictor::load(inference_config)?;
    let state = Arc::new(AppState::new(config.clone(), predictor));
    let app = create_router(state, &config);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!(
        host = %config.host,
        port = config.port,
        address = %addr,
        started_at = %start_time.to_rfc3339(),
        "Heart risk server starting"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(address = %addr, pid = std::process::id(), "Server listening and ready to accept connections");

    let shutdown_signal = async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for ctrl+c, shutting down");
        }
        let stop_time = chrono::Utc::now();
        let uptime = stop_time.signed_duration_since(start_time);
        info!(
            stopped_at = %stop_time.to_rfc3339(),
            uptime_secs = uptime.num_seconds(),
            "Shutdown signal received, stopping server gracefully"
        );
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("Server shut down cleanly");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inference_config_uses_models_dir() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            models_dir: PathBuf::from("/srv/models"),
            preprocessor_path: None,
            classifier_path: Some(PathBuf::from("/opt/lr.json")),
            cors_origin: None,
        };
        let inference = config.inference_config();
        assert_eq!(inference.preprocessor_path, PathBuf::from("/srv/models/preprocessor.json"));
        assert_eq!(inference.classifier_path, PathBuf::from("/opt/lr.json"));
        assert_eq!(inference.classification_threshold, 0.5);
    }
}
