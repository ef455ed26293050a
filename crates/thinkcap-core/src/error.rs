//! Unified error types for thinkcap-core.

use thinkcap_types::TypedError;
use thiserror::Error;

/// Error type for the fallible edges of the crate (config and registry loading).
///
/// Classification and normalization never return this.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AppError {
    /// Typed configuration or registry error.
    #[error(transparent)]
    Typed(#[from] TypedError),

    /// File system I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration location could not be resolved.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<thinkcap_types::ConfigError> for AppError {
    fn from(e: thinkcap_types::ConfigError) -> Self {
        AppError::Typed(e.into())
    }
}

impl From<thinkcap_types::RegistryError> for AppError {
    fn from(e: thinkcap_types::RegistryError) -> Self {
        AppError::Typed(e.into())
    }
}

/// Result type alias for thinkcap-core operations.
pub type AppResult<T> = Result<T, AppError>;
