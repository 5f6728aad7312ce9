//! Data preprocessing module
//!
//! Fitted, inference-only transforms loaded from JSON artifacts:
//! - Standard scaling for numeric columns
//! - One-hot encoding for categorical columns
//! - A column transformer that routes record columns to each step

mod encoder;
mod pipeline;
mod scaler;

pub use encoder::{HandleUnknown, OneHotEncoder};
pub use pipeline::{Preprocessor, Remainder, TransformerKind, TransformerStep};
pub use scaler::StandardScaler;
