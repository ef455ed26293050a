//! Typed error definitions for thinkcap.
//!
//! The budget normalizer and classifiers never fail; errors only arise while
//! loading configuration or registering capability records.

mod config;
mod registry;

pub use config::ConfigError;
pub use registry::RegistryError;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type that wraps all domain-specific errors.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "domain", content = "error")]
pub enum TypedError {
    /// Wraps a configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Wraps a capability registry error
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),
}

/// Standard Result type using TypedError.
pub type Result<T> = std::result::Result<T, TypedError>;
