//! Fitted column transformer

use crate::error::{HeartRiskError, Result};
use crate::feature_engineering::FeatureRow;
use crate::utils::{read_json_artifact, write_json_artifact};
use super::{encoder::OneHotEncoder, scaler::StandardScaler};
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The fitted transform applied by one step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransformerKind {
    StandardScaler(StandardScaler),
    OneHot(OneHotEncoder),
    /// Forward numeric and boolean values unchanged (bool as 0/1)
    Passthrough,
}

/// One named step of the column transformer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformerStep {
    pub name: String,
    pub columns: Vec<String>,
    pub kind: TransformerKind,
}

impl TransformerStep {
    pub fn new(name: impl Into<String>, columns: &[&str], kind: TransformerKind) -> Self {
        Self {
            name: name.into(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            kind,
        }
    }

    fn n_features_out(&self) -> usize {
        match &self.kind {
            TransformerKind::StandardScaler(_) | TransformerKind::Passthrough => self.columns.len(),
            TransformerKind::OneHot(encoder) => encoder.n_features_out(),
        }
    }

    fn feature_names_out(&self) -> Vec<String> {
        let names = match &self.kind {
            TransformerKind::OneHot(encoder) => encoder.feature_names(&self.columns),
            _ => self.columns.clone(),
        };
        names
            .into_iter()
            .map(|n| format!("{}__{}", self.name, n))
            .collect()
    }
}

/// Handling of input columns not named by any step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Remainder {
    #[default]
    Drop,
    Passthrough,
}

/// Column-wise preprocessor fitted on the fifteen-column patient record.
///
/// Steps are applied in order and their outputs concatenated. The record
/// handed to [`Preprocessor::transform`] must carry exactly the columns the
/// preprocessor was fitted on, in the same order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preprocessor {
    feature_names_in: Vec<String>,
    transformers: Vec<TransformerStep>,
    #[serde(default)]
    remainder: Remainder,
}

impl Preprocessor {
    pub fn new(
        feature_names_in: Vec<String>,
        transformers: Vec<TransformerStep>,
        remainder: Remainder,
    ) -> Result<Self> {
        let preprocessor = Self {
            feature_names_in,
            transformers,
            remainder,
        };
        preprocessor.validate()?;
        Ok(preprocessor)
    }

    /// Load and validate a preprocessor artifact
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let preprocessor: Self = read_json_artifact(path)?;
        preprocessor.validate()?;
        Ok(preprocessor)
    }

    /// Save the preprocessor to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        write_json_artifact(self, path)
    }

    pub fn feature_names_in(&self) -> &[String] {
        &self.feature_names_in
    }

    pub fn transformers(&self) -> &[TransformerStep] {
        &self.transformers
    }

    pub fn n_features_out(&self) -> usize {
        let steps: usize = self.transformers.iter().map(TransformerStep::n_features_out).sum();
        steps + self.remainder_columns().len()
    }

    pub fn feature_names_out(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .transformers
            .iter()
            .flat_map(TransformerStep::feature_names_out)
            .collect();
        names.extend(
            self.remainder_columns()
                .into_iter()
                .map(|c| format!("remainder__{}", c)),
        );
        names
    }

    fn remainder_columns(&self) -> Vec<&str> {
        if self.remainder == Remainder::Drop {
            return Vec::new();
        }
        self.feature_names_in
            .iter()
            .filter(|c| !self.transformers.iter().any(|t| t.columns.contains(*c)))
            .map(String::as_str)
            .collect()
    }

    fn validate(&self) -> Result<()> {
        for step in &self.transformers {
            if let Some(missing) = step
                .columns
                .iter()
                .find(|c| !self.feature_names_in.contains(*c))
            {
                return Err(HeartRiskError::ArtifactMismatch(format!(
                    "transformer {:?} references column {:?} the preprocessor was not fitted on",
                    step.name, missing
                )));
            }

            let fitted_width = match &step.kind {
                TransformerKind::StandardScaler(scaler) => {
                    scaler.validate()?;
                    scaler.n_features()
                }
                TransformerKind::OneHot(encoder) => encoder.n_features_in(),
                TransformerKind::Passthrough => step.columns.len(),
            };
            if fitted_width != step.columns.len() {
                return Err(HeartRiskError::ArtifactMismatch(format!(
                    "transformer {:?} was fitted on {} columns but names {}",
                    step.name,
                    fitted_width,
                    step.columns.len()
                )));
            }
        }
        Ok(())
    }

    fn column(&self, row: &FeatureRow, name: &str) -> Result<usize> {
        self.feature_names_in
            .iter()
            .position(|c| c == name)
            .filter(|&idx| idx < row.len())
            .ok_or_else(|| HeartRiskError::FeatureNotFound(name.to_string()))
    }

    fn numeric_values(&self, row: &FeatureRow, columns: &[String]) -> Result<Vec<f64>> {
        columns
            .iter()
            .map(|name| {
                let idx = self.column(row, name)?;
                row.values()[idx].as_f64().ok_or_else(|| {
                    HeartRiskError::PreprocessingError(format!(
                        "column {:?} is categorical but is routed to a numeric transformer",
                        name
                    ))
                })
            })
            .collect()
    }

    /// Encode one record into a `1 x n_features_out` matrix.
    pub fn transform(&self, row: &FeatureRow) -> Result<Array2<f64>> {
        if row.columns() != self.feature_names_in.as_slice() {
            return Err(HeartRiskError::PreprocessingError(format!(
                "record columns {:?} do not match the fitted columns {:?}",
                row.columns(),
                self.feature_names_in
            )));
        }

        let mut encoded = Vec::with_capacity(self.n_features_out());
        for step in &self.transformers {
            match &step.kind {
                TransformerKind::StandardScaler(scaler) => {
                    let values = self.numeric_values(row, &step.columns)?;
                    encoded.extend(scaler.transform(&values)?.iter().copied());
                }
                TransformerKind::Passthrough => {
                    encoded.extend(self.numeric_values(row, &step.columns)?);
                }
                TransformerKind::OneHot(encoder) => {
                    let levels = step
                        .columns
                        .iter()
                        .map(|name| {
                            let idx = self.column(row, name)?;
                            row.values()[idx].as_category().ok_or_else(|| {
                                HeartRiskError::PreprocessingError(format!(
                                    "column {:?} is numeric but is routed to a categorical encoder",
                                    name
                                ))
                            })
                        })
                        .collect::<Result<Vec<_>>>()?;
                    encoded.extend(encoder.transform(&step.columns, &levels)?);
                }
            }
        }

        let remainder: Vec<String> = self
            .remainder_columns()
            .into_iter()
            .map(str::to_string)
            .collect();
        encoded.extend(self.numeric_values(row, &remainder)?);

        let width = encoded.len();
        Ok(Array2::from_shape_vec((1, width), encoded)?)
    }
}
