//! Capability registry errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a capability record is rejected by the registry.
///
/// Lookups never produce these; an unknown model is a normal outcome.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum RegistryError {
    /// Model record with an empty identifier
    #[error("Model id must not be empty")]
    EmptyModelId,

    /// Thinking range whose lower bound exceeds its upper bound
    #[error("Invalid thinking range for {model}: min {min} > max {max}")]
    InvalidRange {
        /// Model whose record was rejected
        model: String,
        /// Declared lower bound
        min: i64,
        /// Declared upper bound
        max: i64,
    },

    /// Same model id listed twice in one config file
    #[error("Duplicate model entry: {model}")]
    DuplicateModel {
        /// Model id that appeared more than once
        model: String,
    },
}
