//! Store errors.

/// Common result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage read: {0}")]
    Read(String),
    #[error("storage write: {0}")]
    Write(String),
    #[error("encode todo list: {0}")]
    Encode(#[from] serde_json::Error),
}
