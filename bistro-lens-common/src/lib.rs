pub mod config;
pub use config::{Config, DatasetConfig, FilterDefaults};

use thiserror::Error;

/// Fatal at startup: the process should not serve requests after one of these.
#[derive(Error, Debug)]
pub enum DataLoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),
    #[error("required column '{0}' not found in dataset")]
    MissingColumn(String),
    #[error("column '{column}' unusable: {reason}")]
    BadColumn { column: String, reason: String },
}

/// Raised at the interaction boundary for malformed selection input.
/// Filter evaluation itself never fails on well-typed input.
#[derive(Error, Debug)]
pub enum SelectionError {
    #[error("invalid rating range [{lo}, {hi}]")]
    InvalidRatingRange { lo: f64, hi: f64 },
    #[error("invalid diet choice '{0}' (expected 'Y' or 'N')")]
    InvalidDietChoice(String),
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type LoadResult<T> = std::result::Result<T, DataLoadError>;
