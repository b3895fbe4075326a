use crate::validation::ValidationError;
use thiserror::Error;

/// Core error type for the form-definition model
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A validation layer rejected a transition or submission
    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::SerializationError(err.to_string())
    }
}

impl From<String> for CoreError {
    fn from(err: String) -> Self {
        CoreError::Other(err)
    }
}

impl From<&str> for CoreError {
    fn from(err: &str) -> Self {
        CoreError::Other(err.to_string())
    }
}
