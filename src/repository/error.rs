// ==========================================
// ADA Management - repository error types
// ==========================================
// thiserror derive; rusqlite failures are classified so callers
// can tell constraint violations from plain query errors.
// ==========================================

use thiserror::Error;

/// Repository-layer error type.
#[derive(Error, Debug)]
pub enum RepositoryError {
    // ===== database errors =====
    #[error("record not found: {entity} with key={key}")]
    NotFound { entity: String, key: String },

    #[error("database connection failed: {0}")]
    DatabaseConnectionError(String),

    #[error("database lock acquisition failed: {0}")]
    LockError(String),

    #[error("database query failed: {0}")]
    DatabaseQueryError(String),

    #[error("unique constraint violated: {0}")]
    UniqueConstraintViolation(String),

    #[error("foreign key constraint violated: {0}")]
    ForeignKeyViolation(String),

    // ===== generic =====
    #[error("internal error: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<rusqlite::Error> for RepositoryError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(_, Some(msg)) => {
                if msg.contains("UNIQUE") {
                    RepositoryError::UniqueConstraintViolation(msg)
                } else if msg.contains("FOREIGN KEY") {
                    RepositoryError::ForeignKeyViolation(msg)
                } else {
                    RepositoryError::DatabaseQueryError(msg)
                }
            }
            rusqlite::Error::QueryReturnedNoRows => RepositoryError::NotFound {
                entity: "Unknown".to_string(),
                key: "Unknown".to_string(),
            },
            _ => RepositoryError::DatabaseQueryError(err.to_string()),
        }
    }
}

/// Result alias for the repository layer.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
