//! Store error types using thiserror.

/// Error type for all store operations.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    /// Underlying database error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
