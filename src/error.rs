//! Error types for the heart risk service

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for heart risk operations
pub type Result<T> = std::result::Result<T, HeartRiskError>;

/// Main error type for artifact loading, preprocessing and inference
#[derive(Error, Debug)]
pub enum HeartRiskError {
    #[error("Failed to read artifact {path}: {source}")]
    ArtifactIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse artifact {path}: {source}")]
    ArtifactFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Artifact mismatch: {0}")]
    ArtifactMismatch(String),

    #[error("Preprocessing error: {0}")]
    PreprocessingError(String),

    #[error("Found unknown category {value:?} in column {column:?} during transform")]
    UnknownCategory { column: String, value: Option<String> },

    #[error("Inference error: {0}")]
    InferenceError(String),

    #[error("Invalid shape: expected {expected}, got {actual}")]
    ShapeError { expected: String, actual: String },

    #[error("Feature not found: {0}")]
    FeatureNotFound(String),

    /// Request values that pass the schema but cannot be scored
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for HeartRiskError {
    fn from(err: serde_json::Error) -> Self {
        HeartRiskError::SerializationError(err.to_string())
    }
}

impl From<ndarray::ShapeError> for HeartRiskError {
    fn from(err: ndarray::ShapeError) -> Self {
        HeartRiskError::ShapeError {
            expected: "valid shape".to_string(),
            actual: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HeartRiskError::UnknownCategory {
            column: "restecg".to_string(),
            value: Some("lv hypertrophy".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Found unknown category Some(\"lv hypertrophy\") in column \"restecg\" during transform"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: HeartRiskError = io_err.into();
        assert!(matches!(err, HeartRiskError::IoError(_)));
    }

    #[test]
    fn test_error_from_shape() {
        let shape_err = ndarray::Array2::<f64>::from_shape_vec((2, 2), vec![1.0]).unwrap_err();
        let err: HeartRiskError = shape_err.into();
        assert!(matches!(err, HeartRiskError::ShapeError { .. }));
    }
}
