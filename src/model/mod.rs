//! Fitted classifiers

mod logistic;

pub use logistic::LogisticClassifier;
