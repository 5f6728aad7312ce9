//! Inference configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const PREPROCESSOR_FILE: &str = "preprocessor.json";
pub const CLASSIFIER_FILE: &str = "classifier.json";

/// Configuration for model inference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Fitted preprocessor artifact
    pub preprocessor_path: PathBuf,

    /// Fitted classifier artifact
    pub classifier_path: PathBuf,

    /// Probabilities strictly above this are labelled positive
    pub classification_threshold: f64,

    /// Decimal places kept in the reported probability
    pub probability_decimals: u32,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self::from_models_dir("./models")
    }
}

impl InferenceConfig {
    /// Artifacts under their standard names in `dir`
    pub fn from_models_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            preprocessor_path: dir.join(PREPROCESSOR_FILE),
            classifier_path: dir.join(CLASSIFIER_FILE),
            classification_threshold: 0.5,
            probability_decimals: 4,
        }
    }

    pub fn with_preprocessor_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.preprocessor_path = path.into();
        self
    }

    pub fn with_classifier_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.classifier_path = path.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = InferenceConfig::default();
        assert_eq!(config.classification_threshold, 0.5);
        assert_eq!(config.probability_decimals, 4);
        assert_eq!(config.preprocessor_path, PathBuf::from("./models/preprocessor.json"));
        assert_eq!(config.classifier_path, PathBuf::from("./models/classifier.json"));
    }

    #[test]
    fn test_path_overrides() {
        let config = InferenceConfig::from_models_dir("/srv/models")
            .with_classifier_path("/tmp/lr.json");
        assert_eq!(config.preprocessor_path, PathBuf::from("/srv/models/preprocessor.json"));
        assert_eq!(config.classifier_path, PathBuf::from("/tmp/lr.json"));
    }
}
