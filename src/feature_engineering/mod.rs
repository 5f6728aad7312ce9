//! Feature engineering module
//!
//! Turns the eight raw clinical observations into the fifteen-column record
//! the fitted preprocessor expects:
//! - Input schema with enumerated categorical values
//! - Age, blood pressure and cholesterol binning
//! - Max heart rate estimate and age/cholesterol interaction
//! - Chest pain severity and composite score

pub mod clinical;
pub mod input;
mod record;

pub use clinical::{
    categorize_age, categorize_bp, categorize_chol, cp_severity, derive_features, AgeGroup,
    BpCategory, CholCategory, DerivedFeatures,
};
pub use input::{ChestPain, PatientInput, RestEcg, Sex};
pub use record::{FeatureRow, FeatureValue, PatientRecord, FEATURE_COLUMNS};
