//! Risk prediction engine
//!
//! Owns the fitted preprocessor and classifier for the lifetime of the
//! process. Both are loaded once, cross-checked against each other and
//! against the fixed record layout, and only read afterwards, so a single
//! engine can serve concurrent requests without locking.

use crate::error::{HeartRiskError, Result};
use crate::feature_engineering::{PatientInput, PatientRecord, FEATURE_COLUMNS};
use crate::model::LogisticClassifier;
use crate::preprocessing::Preprocessor;
use super::{InferenceConfig, PredictionResponse};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info};

/// Coefficient attached to one encoded feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureWeight {
    pub feature: String,
    pub coefficient: f64,
}

/// Shape and weights of the loaded model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSummary {
    pub input_columns: Vec<String>,
    pub n_features_in: usize,
    pub n_encoded_features: usize,
    pub intercept: f64,
    /// Sorted by absolute coefficient, largest first
    pub feature_weights: Vec<FeatureWeight>,
}

/// Heart disease risk predictor
#[derive(Debug)]
pub struct RiskPredictor {
    config: InferenceConfig,
    preprocessor: Preprocessor,
    classifier: LogisticClassifier,
}

impl RiskPredictor {
    /// Pair an already-loaded preprocessor and classifier
    pub fn new(
        config: InferenceConfig,
        preprocessor: Preprocessor,
        classifier: LogisticClassifier,
    ) -> Result<Self> {
        if preprocessor.feature_names_in() != FEATURE_COLUMNS {
            return Err(HeartRiskError::ArtifactMismatch(format!(
                "preprocessor was fitted on columns {:?}, expected {:?}",
                preprocessor.feature_names_in(),
                FEATURE_COLUMNS
            )));
        }

        let encoded = preprocessor.n_features_out();
        if encoded != classifier.n_features_in() {
            return Err(HeartRiskError::ArtifactMismatch(format!(
                "preprocessor produces {} features but the classifier expects {}",
                encoded,
                classifier.n_features_in()
            )));
        }

        if let Some(names) = classifier.feature_names_in() {
            let produced = preprocessor.feature_names_out();
            if names != produced.as_slice() {
                return Err(HeartRiskError::ArtifactMismatch(
                    "classifier feature names differ from the preprocessor output".to_string(),
                ));
            }
        }

        Ok(Self {
            config,
            preprocessor,
            classifier,
        })
    }

    /// Load both artifacts from the configured paths
    pub fn load(config: InferenceConfig) -> Result<Self> {
        let start = Instant::now();
        let preprocessor = Preprocessor::load(&config.preprocessor_path)?;
        let classifier = LogisticClassifier::load(&config.classifier_path)?;

        info!(
            preprocessor = %config.preprocessor_path.display(),
            classifier = %config.classifier_path.display(),
            n_encoded_features = preprocessor.n_features_out(),
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Model and preprocessor loaded"
        );

        Self::new(config, preprocessor, classifier)
    }

    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    pub fn preprocessor(&self) -> &Preprocessor {
        &self.preprocessor
    }

    pub fn classifier(&self) -> &LogisticClassifier {
        &self.classifier
    }

    /// Probability of the positive class for one record
    pub fn predict_proba(&self, record: &PatientRecord) -> Result<f64> {
        let encoded = self.preprocessor.transform(&record.to_row())?;
        let proba = self.classifier.predict_proba(&encoded)?;
        let positive = proba[[0, 1]];

        if !positive.is_finite() {
            return Err(HeartRiskError::InferenceError(format!(
                "classifier produced a non-finite probability ({})",
                positive
            )));
        }
        Ok(positive)
    }

    /// Derive features, score and format a response
    pub fn predict(&self, input: PatientInput) -> Result<PredictionResponse> {
        let record = PatientRecord::from_input(input)?;
        let probability = self.predict_proba(&record)?;
        debug!(
            age_group = record.derived.age_group.as_str(),
            probability,
            "Scored patient record"
        );
        Ok(PredictionResponse::from_probability(
            probability,
            self.config.classification_threshold,
            self.config.probability_decimals,
        ))
    }

    pub fn summary(&self) -> ModelSummary {
        let names = self.preprocessor.feature_names_out();
        let mut feature_weights: Vec<FeatureWeight> = names
            .into_iter()
            .zip(self.classifier.coefficients())
            .map(|(feature, &coefficient)| FeatureWeight {
                feature,
                coefficient,
            })
            .collect();
        feature_weights.sort_by(|a, b| b.coefficient.abs().total_cmp(&a.coefficient.abs()));

        ModelSummary {
            input_columns: self.preprocessor.feature_names_in().to_vec(),
            n_features_in: self.preprocessor.feature_names_in().len(),
            n_encoded_features: self.preprocessor.n_features_out(),
            intercept: self.classifier.intercept(),
            feature_weights,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature_engineering::{ChestPain, RestEcg, Sex};
    use crate::preprocessing::{
        HandleUnknown, OneHotEncoder, Remainder, StandardScaler, TransformerKind, TransformerStep,
    };

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    /// Scales the numeric columns, one-hot encodes sex only, forwards flags.
    fn preprocessor() -> Preprocessor {
        Preprocessor::new(
            strings(&FEATURE_COLUMNS),
            vec![
                TransformerStep::new(
                    "num",
                    &["age", "chest_pain_score"],
                    TransformerKind::StandardScaler(
                        StandardScaler::new(vec![50.0, 1.0], vec![10.0, 1.0]).unwrap(),
                    ),
                ),
                TransformerStep::new(
                    "cat",
                    &["sex"],
                    TransformerKind::OneHot(OneHotEncoder::new(
                        vec![strings(&["Female", "Male"])],
                        HandleUnknown::Error,
                    )),
                ),
                TransformerStep::new("bool", &["exang"], TransformerKind::Passthrough),
            ],
            Remainder::Drop,
        )
        .unwrap()
    }

    fn predictor(coefficients: Vec<f64>, intercept: f64) -> RiskPredictor {
        RiskPredictor::new(
            InferenceConfig::default(),
            preprocessor(),
            LogisticClassifier::new(coefficients, intercept).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_zero_model_is_not_positive() {
        let predictor = predictor(vec![0.0; 5], 0.0);
        let response = predictor.predict(PatientInput::example()).unwrap();
        assert_eq!(response.prediction_probability, 0.5);
        assert_eq!(response.prediction.as_str(), "No Disease");
    }

    #[test]
    fn test_exang_weight_raises_risk() {
        let predictor = predictor(vec![0.0, 0.0, 0.0, 0.0, 3.0], -1.0);
        let mut input = PatientInput::example();
        input.exang = true;
        let high = predictor.predict_proba(&input.clone().try_into().unwrap()).unwrap();
        input.exang = false;
        let low = predictor.predict_proba(&input.try_into().unwrap()).unwrap();
        assert!(high > 0.5 && low < 0.5, "high={high} low={low}");
    }

    #[test]
    fn test_prediction_is_deterministic() {
        let predictor = predictor(vec![0.3, -0.2, 0.1, 0.4, 0.9], -0.1);
        let input = PatientInput {
            age: 61,
            sex: Sex::Female,
            cp: ChestPain::Asymptomatic,
            trestbps: 145.0,
            chol: 260.0,
            fbs: true,
            exang: false,
            restecg: RestEcg::StTAbnormality,
        };
        let first = predictor.predict(input.clone()).unwrap();
        let second = predictor.predict(input).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_width_mismatch_is_rejected() {
        let result = RiskPredictor::new(
            InferenceConfig::default(),
            preprocessor(),
            LogisticClassifier::new(vec![0.1; 4], 0.0).unwrap(),
        );
        assert!(matches!(result, Err(HeartRiskError::ArtifactMismatch(_))));
    }

    #[test]
    fn test_column_order_is_enforced() {
        let mut columns = strings(&FEATURE_COLUMNS);
        columns.swap(0, 1);
        let pre = Preprocessor::new(
            columns,
            vec![TransformerStep::new("bool", &["exang"], TransformerKind::Passthrough)],
            Remainder::Drop,
        )
        .unwrap();
        let result = RiskPredictor::new(
            InferenceConfig::default(),
            pre,
            LogisticClassifier::new(vec![1.0], 0.0).unwrap(),
        );
        assert!(matches!(result, Err(HeartRiskError::ArtifactMismatch(_))));
    }

    #[test]
    fn test_classifier_feature_names_are_checked() {
        let classifier = LogisticClassifier::new(vec![0.0; 5], 0.0)
            .unwrap()
            .with_feature_names(strings(&["a", "b", "c", "d", "e"]))
            .unwrap();
        let result = RiskPredictor::new(InferenceConfig::default(), preprocessor(), classifier);
        assert!(matches!(result, Err(HeartRiskError::ArtifactMismatch(_))));
    }

    #[test]
    fn test_summary_ranks_by_magnitude() {
        let predictor = predictor(vec![0.1, -2.0, 0.5, 0.0, 1.0], 0.25);
        let summary = predictor.summary();
        assert_eq!(summary.n_features_in, 15);
        assert_eq!(summary.n_encoded_features, 5);
        assert_eq!(summary.feature_weights[0].feature, "num__chest_pain_score");
        assert_eq!(summary.feature_weights[1].feature, "bool__exang");
        assert_eq!(summary.intercept, 0.25);
    }

    #[test]
    fn test_extreme_age_is_rejected_before_scoring() {
        let predictor = predictor(vec![0.0; 5], 0.0);
        let mut input = PatientInput::example();
        input.age = i64::MIN + 1;
        let result = predictor.predict(input);
        assert!(matches!(result, Err(HeartRiskError::InvalidInput(_))));
    }
}
