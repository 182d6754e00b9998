//! Read an exported file back, e.g. to show the first rows after a download.

use super::provider::DataError;
use serde::Deserialize;
use std::path::Path;

/// One row of an exported file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PriceRow {
    pub timestamps: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
    pub amount: f64,
}

/// Load every row of an exported file.
pub fn read_csv(path: &Path) -> Result<Vec<PriceRow>, DataError> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| DataError::Csv(format!("open {}: {e}", path.display())))?;
    reader
        .deserialize()
        .collect::<Result<Vec<PriceRow>, _>>()
        .map_err(|e| DataError::Csv(format!("read {}: {e}", path.display())))
}

/// First `n` rows of an exported file.
pub fn head(path: &Path, n: usize) -> Result<Vec<PriceRow>, DataError> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| DataError::Csv(format!("open {}: {e}", path.display())))?;
    reader
        .deserialize()
        .take(n)
        .collect::<Result<Vec<PriceRow>, _>>()
        .map_err(|e| DataError::Csv(format!("read {}: {e}", path.display())))
}
