//! Utility functions and types

use crate::error::{HeartRiskError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

/// Read a fitted artifact stored as a JSON document.
pub fn read_json_artifact<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| HeartRiskError::ArtifactIo {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&json).map_err(|source| HeartRiskError::ArtifactFormat {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a fitted artifact as pretty-printed JSON.
pub fn write_json_artifact<T: Serialize>(value: &T, path: impl AsRef<Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Round to the given number of decimal places.
///
/// Rounds the exact binary value through its decimal expansion, so
/// `0.12345` (stored just above the tie) becomes `0.1235`.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    format!("{:.*}", decimals as usize, value)
        .parse()
        .unwrap_or(value)
}
