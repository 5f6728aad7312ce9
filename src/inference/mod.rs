//! Inference module
//!
//! Scores one patient record per call:
//! - Feature derivation and fixed-order record assembly
//! - Preprocessor transform followed by logistic regression
//! - Probability thresholding and templated response message

mod config;
mod engine;
mod response;

pub use config::{InferenceConfig, CLASSIFIER_FILE, PREPROCESSOR_FILE};
pub use engine::{FeatureWeight, ModelSummary, RiskPredictor};
pub use response::{PredictionLabel, PredictionResponse};
