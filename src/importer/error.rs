// ==========================================
// ADA Management - import module error types
// ==========================================
// thiserror derive. Every variant aborts the whole import;
// malformed individual rows and cells are not errors (they
// degrade to zero values or skipped rows instead).
// ==========================================

use crate::repository::RepositoryError;
use thiserror::Error;

/// Import pipeline error type.
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== file errors =====
    #[error("unsupported file format: {0:?} (only .csv and .xlsx are accepted)")]
    UnsupportedFormat(String),

    #[error("file could not be read as the claimed format: {0}")]
    ReadFailure(String),

    #[error("workbook contains no readable sheet")]
    NoSheet,

    // ===== structural errors =====
    #[error("file is empty or contains only a header row")]
    EmptyOrHeaderOnly,

    #[error("invalid spreadsheet schema: mandatory columns missing: {missing:?}")]
    InvalidSchema { missing: Vec<String> },

    // ===== persistence errors =====
    #[error("persistence failure: {0}")]
    PersistenceFailure(#[from] RepositoryError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::ReadFailure(err.to_string())
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::ReadFailure(err.to_string())
    }
}

impl From<calamine::XlsxError> for ImportError {
    fn from(err: calamine::XlsxError) -> Self {
        ImportError::ReadFailure(err.to_string())
    }
}

/// Result alias for the import pipeline.
pub type ImportResult<T> = Result<T, ImportError>;
