//! Error types for the risk register engine.

mod storage_error;
mod validation_error;

pub use storage_error::StorageError;
pub use validation_error::{FieldError, ValidationErrors};

/// Crate-wide result alias.
pub type RasResult<T> = Result<T, RasError>;

/// Top-level error for every fallible engine operation.
#[derive(Debug, thiserror::Error)]
pub enum RasError {
    #[error("validation failed: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("configuration error: {reason}")]
    ConfigError { reason: String },
}

impl From<toml::de::Error> for RasError {
    fn from(err: toml::de::Error) -> Self {
        RasError::ConfigError {
            reason: err.to_string(),
        }
    }
}
