//! Heart Risk - heart disease risk prediction service
//!
//! Serves a single fitted binary classifier over HTTP. A request carries
//! eight clinical observations; the service derives seven engineered
//! features, encodes all fifteen with a fitted column preprocessor, and
//! returns the logistic regression probability with a thresholded label.
//!
//! # Modules
//!
//! - [`feature_engineering`] - Input schema and derived clinical features
//! - [`preprocessing`] - Fitted scaler, one-hot encoder and column transformer
//! - [`model`] - Fitted logistic regression
//! - [`inference`] - Artifact loading, scoring and response formatting
//! - [`server`] - HTTP server with REST API
//! - [`cli`] - Command-line interface

pub mod error;

pub mod feature_engineering;
pub mod preprocessing;
pub mod model;
pub mod inference;

pub mod utils;

pub mod server;
pub mod cli;

pub use error::{HeartRiskError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::{HeartRiskError, Result};

    pub use crate::feature_engineering::{
        derive_features, ChestPain, DerivedFeatures, PatientInput, PatientRecord, RestEcg, Sex,
        FEATURE_COLUMNS,
    };

    pub use crate::preprocessing::{OneHotEncoder, Preprocessor, StandardScaler};

    pub use crate::model::LogisticClassifier;

    pub use crate::inference::{InferenceConfig, PredictionLabel, PredictionResponse, RiskPredictor};
}
