use thiserror::Error;

/// Errors that can occur during store operations.
///
/// All variants are deterministic given the current filesystem state, so
/// none of them is worth retrying without a change on disk.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The supplied name reduced to nothing after sanitization.
    #[error("Invalid name: {0:?} does not contain a usable file name")]
    InvalidName(String),
    /// No name was supplied at all.
    #[error("No target acquired")]
    NoTarget,
    /// The name is well-formed but nothing is stored under it.
    #[error("Not found: {0}")]
    NotFound(String),
    /// The filesystem refused the operation.
    #[error("System failure: {0}")]
    SystemFailure(String),
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::SystemFailure(err.to_string())
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
