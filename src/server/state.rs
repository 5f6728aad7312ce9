//! Application state management

use crate::inference::RiskPredictor;

use super::ServerConfig;

/// Application state shared across handlers. Read-only after startup.
pub struct AppState {
    pub config: ServerConfig,
    pub predictor: RiskPredictor,
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    pub fn new(config: ServerConfig, predictor: RiskPredictor) -> Self {
        Self {
            config,
            predictor,
            started_at: chrono::Utc::now(),
        }
    }

    pub fn uptime_secs(&self) -> i64 {
        chrono::Utc::now()
            .signed_duration_since(self.started_at)
            .num_seconds()
    }
}
