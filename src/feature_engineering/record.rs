//! Fifteen-column patient record handed to the preprocessor

use super::clinical::{derive_features, DerivedFeatures};
use super::input::PatientInput;
use crate::error::{HeartRiskError, Result};
use serde::{Deserialize, Serialize};

/// Column order the preprocessor was fitted with. Column-position dependent
/// transformers break if this changes.
pub const FEATURE_COLUMNS: [&str; 15] = [
    "age",
    "sex",
    "cp",
    "trestbps",
    "chol",
    "fbs",
    "exang",
    "restecg",
    "age_group",
    "bp_category",
    "chol_category",
    "max_hr_predicted",
    "age_chol_interaction",
    "cp_severity",
    "chest_pain_score",
];

/// A single cell of a feature row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Number(f64),
    Flag(bool),
    /// Categorical level; `None` is a missing level
    Category(Option<String>),
}

impl FeatureValue {
    pub fn category(value: &str) -> Self {
        FeatureValue::Category(Some(value.to_string()))
    }

    /// Numeric view of the value. Flags map to 0/1; categories have none.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FeatureValue::Number(v) => Some(*v),
            FeatureValue::Flag(b) => Some(if *b { 1.0 } else { 0.0 }),
            FeatureValue::Category(_) => None,
        }
    }

    pub fn as_category(&self) -> Option<Option<&str>> {
        match self {
            FeatureValue::Category(c) => Some(c.as_deref()),
            _ => None,
        }
    }
}

/// Named, ordered feature values for one record
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    columns: Vec<String>,
    values: Vec<FeatureValue>,
}

impl FeatureRow {
    pub fn new(columns: Vec<String>, values: Vec<FeatureValue>) -> Result<Self> {
        if columns.len() != values.len() {
            return Err(HeartRiskError::ShapeError {
                expected: format!("{} values", columns.len()),
                actual: format!("{} values", values.len()),
            });
        }
        Ok(Self { columns, values })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn values(&self) -> &[FeatureValue] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, column: &str) -> Option<&FeatureValue> {
        self.columns
            .iter()
            .position(|c| c == column)
            .and_then(|idx| self.values.get(idx))
    }
}

/// Raw inputs together with their derived features
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    #[serde(flatten)]
    pub input: PatientInput,
    #[serde(flatten)]
    pub derived: DerivedFeatures,
}

impl PatientRecord {
    pub fn from_input(input: PatientInput) -> Result<Self> {
        let derived = derive_features(&input)?;
        Ok(Self { input, derived })
    }

    /// Assemble the record in [`FEATURE_COLUMNS`] order.
    pub fn to_row(&self) -> FeatureRow {
        let input = &self.input;
        let derived = &self.derived;
        let values = vec![
            FeatureValue::Number(input.age as f64),
            FeatureValue::category(input.sex.as_str()),
            FeatureValue::category(input.cp.as_str()),
            FeatureValue::Number(input.trestbps),
            FeatureValue::Number(input.chol),
            FeatureValue::Flag(input.fbs),
            FeatureValue::Flag(input.exang),
            FeatureValue::category(input.restecg.as_str()),
            FeatureValue::category(derived.age_group.as_str()),
            FeatureValue::Category(derived.bp_category.map(|c| c.as_str().to_string())),
            FeatureValue::Category(derived.chol_category.map(|c| c.as_str().to_string())),
            FeatureValue::Number(derived.max_hr_predicted as f64),
            FeatureValue::Number(derived.age_chol_interaction),
            FeatureValue::Number(derived.cp_severity as f64),
            FeatureValue::Number(derived.chest_pain_score as f64),
        ];
        let columns = FEATURE_COLUMNS.iter().map(|c| c.to_string()).collect();
        FeatureRow { columns, values }
    }
}

impl TryFrom<PatientInput> for PatientRecord {
    type Error = HeartRiskError;

    fn try_from(input: PatientInput) -> Result<Self> {
        Self::from_input(input)
    }
}
