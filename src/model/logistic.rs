//! Fitted binary logistic regression

use crate::error::{HeartRiskError, Result};
use crate::utils::{read_json_artifact, write_json_artifact};
use ndarray::{Array1, Array2, ArrayView1, Axis};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Logistic regression for binary classification, loaded from a fitted
/// artifact. Column 1 of [`LogisticClassifier::predict_proba`] is the
/// positive class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticClassifier {
    /// Class labels in probability-column order
    classes: Vec<i64>,
    /// Encoded feature names the model was fitted on, when recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    feature_names_in: Option<Vec<String>>,
    /// Fitted coefficients
    coefficients: Vec<f64>,
    /// Fitted intercept
    intercept: f64,
}

impl LogisticClassifier {
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Result<Self> {
        let model = Self {
            classes: vec![0, 1],
            feature_names_in: None,
            coefficients,
            intercept,
        };
        model.validate()?;
        Ok(model)
    }

    /// Attach the encoded feature names the coefficients belong to
    pub fn with_feature_names(mut self, names: Vec<String>) -> Result<Self> {
        self.feature_names_in = Some(names);
        self.validate()?;
        Ok(self)
    }

    /// Load and validate a classifier artifact
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let model: Self = read_json_artifact(path)?;
        model.validate()?;
        Ok(model)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        write_json_artifact(self, path)
    }

    fn validate(&self) -> Result<()> {
        if self.classes != [0, 1] {
            return Err(HeartRiskError::ArtifactMismatch(format!(
                "expected binary classes [0, 1], found {:?}",
                self.classes
            )));
        }
        if self.coefficients.is_empty() {
            return Err(HeartRiskError::ArtifactMismatch(
                "classifier has no coefficients".to_string(),
            ));
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(HeartRiskError::ArtifactMismatch(
                "classifier parameters must be finite".to_string(),
            ));
        }
        if let Some(names) = &self.feature_names_in {
            if names.len() != self.coefficients.len() {
                return Err(HeartRiskError::ShapeError {
                    expected: format!("{} feature names", self.coefficients.len()),
                    actual: format!("{} feature names", names.len()),
                });
            }
        }
        Ok(())
    }

    pub fn n_features_in(&self) -> usize {
        self.coefficients.len()
    }

    pub fn feature_names_in(&self) -> Option<&[String]> {
        self.feature_names_in.as_deref()
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Sigmoid function
    fn sigmoid(z: &Array1<f64>) -> Array1<f64> {
        z.mapv(|v| 1.0 / (1.0 + (-v).exp()))
    }

    /// Signed distance to the decision boundary, one per row
    pub fn decision_function(&self, x: &Array2<f64>) -> Result<Array1<f64>> {
        if x.ncols() != self.n_features_in() {
            return Err(HeartRiskError::ShapeError {
                expected: format!("{} encoded features", self.n_features_in()),
                actual: format!("{} encoded features", x.ncols()),
            });
        }
        let coefficients = ArrayView1::from(&self.coefficients[..]);
        Ok(x.dot(&coefficients) + self.intercept)
    }

    /// Class probabilities, shape `(n_rows, 2)`
    pub fn predict_proba(&self, x: &Array2<f64>) -> Result<Array2<f64>> {
        let positive = Self::sigmoid(&self.decision_function(x)?);
        let negative = positive.mapv(|p| 1.0 - p);
        Ok(ndarray::stack(Axis(1), &[negative.view(), positive.view()])?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_predict_proba() {
        let model = LogisticClassifier::new(vec![1.0, -1.0], 0.0).unwrap();
        let x = array![[0.0, 0.0], [10.0, 0.0], [0.0, 10.0]];
        let proba = model.predict_proba(&x).unwrap();

        assert_eq!(proba.shape(), &[3, 2]);
        assert!((proba[[0, 1]] - 0.5).abs() < 1e-12);
        assert!(proba[[1, 1]] > 0.99);
        assert!(proba[[2, 1]] < 0.01);
        for row in proba.rows() {
            assert!((row.sum() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_intercept_shifts_probability() {
        let model = LogisticClassifier::new(vec![0.0], 2.0_f64.ln()).unwrap();
        let proba = model.predict_proba(&array![[3.0]]).unwrap();
        assert!((proba[[0, 1]] - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_width_mismatch() {
        let model = LogisticClassifier::new(vec![1.0, 1.0, 1.0], 0.0).unwrap();
        let err = model.predict_proba(&array![[1.0, 2.0]]).unwrap_err();
        assert!(matches!(err, HeartRiskError::ShapeError { .. }));
    }

    #[test]
    fn test_rejects_non_binary_classes() {
        let json = r#"{"classes": [0, 1, 2], "coefficients": [0.1], "intercept": 0.0}"#;
        let model: LogisticClassifier = serde_json::from_str(json).unwrap();
        assert!(matches!(model.validate(), Err(HeartRiskError::ArtifactMismatch(_))));
    }

    #[test]
    fn test_feature_names_must_match_coefficients() {
        let model = LogisticClassifier::new(vec![0.1, 0.2], 0.0).unwrap();
        assert!(model.with_feature_names(vec!["a".to_string()]).is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("classifier.json");
        let model = LogisticClassifier::new(vec![0.5, -0.25], 0.1)
            .unwrap()
            .with_feature_names(vec!["x0".to_string(), "x1".to_string()])
            .unwrap();
        model.save(&path).unwrap();
        assert_eq!(LogisticClassifier::load(&path).unwrap(), model);
    }
}
