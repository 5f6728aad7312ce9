//! Feature scaling

use crate::error::{HeartRiskError, Result};
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Fitted standard (z-score) scaler: `(x - mean) / scale`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl StandardScaler {
    /// Create a scaler from fitted per-column means and scales
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Result<Self> {
        let scaler = Self { mean, scale };
        scaler.validate()?;
        Ok(scaler)
    }

    pub fn n_features(&self) -> usize {
        self.mean.len()
    }

    pub fn mean(&self) -> &[f64] {
        &self.mean
    }

    pub fn scale(&self) -> &[f64] {
        &self.scale
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.mean.len() != self.scale.len() {
            return Err(HeartRiskError::ShapeError {
                expected: format!("{} scale values", self.mean.len()),
                actual: format!("{} scale values", self.scale.len()),
            });
        }
        if self.mean.iter().chain(&self.scale).any(|v| !v.is_finite()) {
            return Err(HeartRiskError::ArtifactMismatch(
                "standard scaler parameters must be finite".to_string(),
            ));
        }
        Ok(())
    }

    /// Scale one value per fitted column.
    pub fn transform(&self, values: &[f64]) -> Result<Array1<f64>> {
        if values.len() != self.n_features() {
            return Err(HeartRiskError::ShapeError {
                expected: format!("{} features", self.n_features()),
                actual: format!("{} features", values.len()),
            });
        }

        let scaled = values
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(&v, (&center, &scale))| {
                let scale = if scale == 0.0 { 1.0 } else { scale };
                (v - center) / scale
            })
            .collect();

        Ok(scaled)
    }
}
