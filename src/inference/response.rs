//! Prediction response formatting

use crate::utils::round_to;
use serde::{Deserialize, Serialize};

/// Thresholded prediction label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PredictionLabel {
    #[serde(rename = "Disease Present")]
    DiseasePresent,
    #[serde(rename = "No Disease")]
    NoDisease,
}

impl PredictionLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PredictionLabel::DiseasePresent => "Disease Present",
            PredictionLabel::NoDisease => "No Disease",
        }
    }

    /// Templated advice embedding the probability at two decimals
    pub fn message(&self, probability: f64) -> String {
        match self {
            PredictionLabel::DiseasePresent => format!(
                "Based on the provided information, there is a high likelihood ({:.2}) of heart disease. \
                 It is recommended to consult a medical professional for further assessment.",
                probability
            ),
            PredictionLabel::NoDisease => format!(
                "Based on the provided information, the likelihood ({:.2}) of heart disease is low. \
                 However, regular check-ups are always advised.",
                probability
            ),
        }
    }
}

/// Body returned by `POST /predict`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub prediction_probability: f64,
    pub prediction: PredictionLabel,
    pub message: String,
}

impl PredictionResponse {
    /// Label `probability > threshold` as positive, then round for display.
    pub fn from_probability(probability: f64, threshold: f64, decimals: u32) -> Self {
        let prediction = if probability > threshold {
            PredictionLabel::DiseasePresent
        } else {
            PredictionLabel::NoDisease
        };
        Self {
            prediction_probability: round_to(probability, decimals),
            prediction,
            message: prediction.message(probability),
        }
    }
}
