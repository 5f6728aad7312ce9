//! Categorical encoding

use crate::error::{HeartRiskError, Result};
use serde::{Deserialize, Serialize};

/// What to do with a level that was not seen during fitting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandleUnknown {
    /// Fail the transform
    #[default]
    Error,
    /// Emit an all-zero indicator block
    Ignore,
}

/// Fitted one-hot encoder.
///
/// Holds one ordered list of categories per input column; each column
/// expands into one indicator per category, in fitted order. A missing
/// level is handled like an unseen one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OneHotEncoder {
    categories: Vec<Vec<String>>,
    #[serde(default)]
    handle_unknown: HandleUnknown,
}

impl OneHotEncoder {
    pub fn new(categories: Vec<Vec<String>>, handle_unknown: HandleUnknown) -> Self {
        Self {
            categories,
            handle_unknown,
        }
    }

    pub fn n_features_in(&self) -> usize {
        self.categories.len()
    }

    pub fn n_features_out(&self) -> usize {
        self.categories.iter().map(Vec::len).sum()
    }

    pub fn categories(&self) -> &[Vec<String>] {
        &self.categories
    }

    pub fn handle_unknown(&self) -> HandleUnknown {
        self.handle_unknown
    }

    /// Output names in `{column}_{category}` form
    pub fn feature_names(&self, columns: &[String]) -> Vec<String> {
        columns
            .iter()
            .zip(&self.categories)
            .flat_map(|(col, cats)| cats.iter().map(move |cat| format!("{}_{}", col, cat)))
            .collect()
    }

    /// Encode one level per fitted column. `columns` names the inputs for
    /// error reporting.
    pub fn transform(&self, columns: &[String], values: &[Option<&str>]) -> Result<Vec<f64>> {
        if values.len() != self.n_features_in() || columns.len() != values.len() {
            return Err(HeartRiskError::ShapeError {
                expected: format!("{} features", self.n_features_in()),
                actual: format!("{} features", values.len()),
            });
        }

        let mut encoded = Vec::with_capacity(self.n_features_out());
        for ((column, &value), cats) in columns.iter().zip(values).zip(&self.categories) {
            let position = value.and_then(|v| cats.iter().position(|c| c == v));
            if position.is_none() && self.handle_unknown == HandleUnknown::Error {
                return Err(HeartRiskError::UnknownCategory {
                    column: column.clone(),
                    value: value.map(str::to_string),
                });
            }
            encoded.extend((0..cats.len()).map(|i| if Some(i) == position { 1.0 } else { 0.0 }));
        }

        Ok(encoded)
    }
}
