//! Raw patient observations accepted by the prediction endpoint

use serde::{Deserialize, Serialize};

/// Biological sex as recorded in the training data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }
}

/// Chest pain type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChestPain {
    #[serde(rename = "typical angina")]
    TypicalAngina,
    #[serde(rename = "atypical angina")]
    AtypicalAngina,
    #[serde(rename = "non-anginal")]
    NonAnginal,
    #[serde(rename = "asymptomatic")]
    Asymptomatic,
}

impl ChestPain {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChestPain::TypicalAngina => "typical angina",
            ChestPain::AtypicalAngina => "atypical angina",
            ChestPain::NonAnginal => "non-anginal",
            ChestPain::Asymptomatic => "asymptomatic",
        }
    }
}

/// Resting electrocardiographic result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RestEcg {
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "st-t abnormality")]
    StTAbnormality,
    #[serde(rename = "lv hypertrophy")]
    LvHypertrophy,
}

impl RestEcg {
    pub fn as_str(&self) -> &'static str {
        match self {
            RestEcg::Normal => "normal",
            RestEcg::StTAbnormality => "st-t abnormality",
            RestEcg::LvHypertrophy => "lv hypertrophy",
        }
    }
}

/// The eight user-supplied clinical observations.
///
/// Every field is required. Deserialization rejects wrong types and values
/// outside the enumerated sets; unrecognised extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientInput {
    /// Age in years
    pub age: i64,
    pub sex: Sex,
    /// Chest pain type
    pub cp: ChestPain,
    /// Resting blood pressure (mm Hg)
    pub trestbps: f64,
    /// Serum cholesterol (mg/dl)
    pub chol: f64,
    /// Fasting blood sugar > 120 mg/dl
    pub fbs: bool,
    /// Exercise induced angina
    pub exang: bool,
    /// Resting electrocardiographic results
    pub restecg: RestEcg,
}

impl PatientInput {
    /// The documented example record.
    pub fn example() -> Self {
        Self {
            age: 55,
            sex: Sex::Male,
            cp: ChestPain::NonAnginal,
            trestbps: 120.0,
            chol: 230.0,
            fbs: false,
            exang: true,
            restecg: RestEcg::Normal,
        }
    }
}
