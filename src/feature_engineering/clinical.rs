//! Clinical feature derivation
//!
//! Fixed binning and arithmetic rules that turn the eight raw observations
//! into the seven engineered features the preprocessor was fitted on.
//! Every bin is lower-inclusive and upper-exclusive; the first bin is
//! unbounded below and the last one unbounded above.

use super::input::{ChestPain, PatientInput};
use crate::error::{HeartRiskError, Result};
use serde::{Deserialize, Serialize};

/// Age bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeGroup {
    /// Younger than 40
    Young,
    /// 40 to 54
    MiddleAged,
    /// 55 to 64
    Senior,
    /// 65 and older
    Elderly,
}

impl AgeGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeGroup::Young => "young",
            AgeGroup::MiddleAged => "middle_aged",
            AgeGroup::Senior => "senior",
            AgeGroup::Elderly => "elderly",
        }
    }
}

/// Resting blood pressure category (mm Hg)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BpCategory {
    Normal,
    Elevated,
    #[serde(rename = "stage1_hypertension")]
    Stage1Hypertension,
    #[serde(rename = "stage2_hypertension")]
    Stage2Hypertension,
}

impl BpCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            BpCategory::Normal => "normal",
            BpCategory::Elevated => "elevated",
            BpCategory::Stage1Hypertension => "stage1_hypertension",
            BpCategory::Stage2Hypertension => "stage2_hypertension",
        }
    }
}

/// Serum cholesterol category (mg/dl)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CholCategory {
    Desirable,
    BorderlineHigh,
    High,
}

impl CholCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            CholCategory::Desirable => "desirable",
            CholCategory::BorderlineHigh => "borderline_high",
            CholCategory::High => "high",
        }
    }
}

pub fn categorize_age(age: i64) -> AgeGroup {
    if age < 40 {
        AgeGroup::Young
    } else if age < 55 {
        AgeGroup::MiddleAged
    } else if age < 65 {
        AgeGroup::Senior
    } else {
        AgeGroup::Elderly
    }
}

/// Bucket a resting blood pressure reading. NaN has no category.
pub fn categorize_bp(bp: f64) -> Option<BpCategory> {
    if bp.is_nan() {
        return None;
    }
    Some(if bp < 120.0 {
        BpCategory::Normal
    } else if bp < 130.0 {
        BpCategory::Elevated
    } else if bp < 140.0 {
        BpCategory::Stage1Hypertension
    } else {
        BpCategory::Stage2Hypertension
    })
}

/// Bucket a cholesterol reading. NaN has no category.
pub fn categorize_chol(chol: f64) -> Option<CholCategory> {
    if chol.is_nan() {
        return None;
    }
    Some(if chol < 200.0 {
        CholCategory::Desirable
    } else if chol < 240.0 {
        CholCategory::BorderlineHigh
    } else {
        CholCategory::High
    })
}

/// Ordinal severity of a chest pain type
pub fn cp_severity(cp: ChestPain) -> i64 {
    match cp {
        ChestPain::TypicalAngina => 3,
        ChestPain::AtypicalAngina => 2,
        ChestPain::NonAnginal => 1,
        ChestPain::Asymptomatic => 0,
    }
}

/// The seven engineered features
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedFeatures {
    pub age_group: AgeGroup,
    /// `None` when the pressure reading is NaN
    pub bp_category: Option<BpCategory>,
    /// `None` when the cholesterol reading is NaN
    pub chol_category: Option<CholCategory>,
    pub max_hr_predicted: i64,
    pub age_chol_interaction: f64,
    pub cp_severity: i64,
    pub chest_pain_score: i64,
}

/// Compute the engineered features for one patient.
///
/// Fails with [`HeartRiskError::InvalidInput`] when `age` is so extreme that
/// the heart rate estimate overflows.
pub fn derive_features(input: &PatientInput) -> Result<DerivedFeatures> {
    let max_hr_predicted = 220_i64.checked_sub(input.age).ok_or_else(|| {
        HeartRiskError::InvalidInput(format!(
            "age: {} is out of range for the heart rate estimate",
            input.age
        ))
    })?;
    let severity = cp_severity(input.cp);
    Ok(DerivedFeatures {
        age_group: categorize_age(input.age),
        bp_category: categorize_bp(input.trestbps),
        chol_category: categorize_chol(input.chol),
        max_hr_predicted,
        age_chol_interaction: input.age as f64 * input.chol / 1000.0,
        cp_severity: severity,
        chest_pain_score: severity + i64::from(input.exang),
    })
}
