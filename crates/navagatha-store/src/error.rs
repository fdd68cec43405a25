//! Store errors

use thiserror::Error;

/// Persistence errors.
///
/// Expected outcomes (record not found, nothing deleted) are sentinel return
/// values on the repository methods, not errors; these variants cover the
/// unexpected I/O and serialization failures only.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing the document failed
    #[error("document I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document or a record could not be (de)serialized
    #[error("document serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
