// File: crates/scatter-core/src/error.rs
// Summary: Error types for scale construction, data loading and rendering.

use thiserror::Error;

/// Rejected scale configurations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScaleError {
    #[error("log scale domain [{0}, {1}] must be strictly positive and not straddle zero")]
    NonPositiveLogDomain(f64, f64),
    #[error("log base {0} is invalid (must be positive and not 1)")]
    InvalidBase(f64),
}

/// Failures while reading point data.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: missing `{field}` column")]
    MissingField { line: u64, field: &'static str },
    #[error("line {line}: `{field}` is not a number: {value:?}")]
    Malformed { line: u64, field: &'static str, value: String },
}

/// Top-level error for building and rendering a chart.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error(transparent)]
    Scale(#[from] ScaleError),
    #[error(transparent)]
    Data(#[from] DataError),
    #[error("failed to create raster surface {0}x{1}")]
    Surface(u32, u32),
    #[error("failed to read back surface pixels")]
    ReadPixels,
    #[error("encode PNG failed")]
    Encode,
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = ChartError> = std::result::Result<T, E>;
