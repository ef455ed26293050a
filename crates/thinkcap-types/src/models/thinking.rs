//! Thinking capability metadata attached to registry entries.

use serde::{Deserialize, Serialize};

use crate::error::RegistryError;

/// Budget sentinel meaning "let the model pick its own thinking budget".
pub const DYNAMIC_BUDGET: i64 = -1;

/// Baseline budget for callers enabling thinking without a requested value.
pub const DEFAULT_THINKING_BUDGET: i64 = 1024;

/// Legal thinking budget range for a single model.
///
/// A model that carries this record supports thinking; a model without it
/// does not, regardless of its name.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ThinkingSupport {
    /// Lower bound of the explicit budget range.
    pub min: i64,
    /// Upper bound of the explicit budget range.
    pub max: i64,
    /// Whether a budget of exactly 0 (thinking disabled) is accepted.
    #[serde(default)]
    pub zero_allowed: bool,
    /// Whether the dynamic sentinel (-1) is accepted.
    #[serde(default)]
    pub dynamic_allowed: bool,
}

impl ThinkingSupport {
    pub const fn new(min: i64, max: i64, zero_allowed: bool, dynamic_allowed: bool) -> Self {
        Self { min, max, zero_allowed, dynamic_allowed }
    }

    /// Returns true if `budget` lies inside `[min, max]`.
    #[inline]
    pub fn contains(&self, budget: i64) -> bool {
        (self.min..=self.max).contains(&budget)
    }

    /// Reject ranges whose bounds are inverted.
    ///
    /// Negative bounds are accepted as-is.
    pub fn validate(&self, model: &str) -> Result<(), RegistryError> {
        if self.min > self.max {
            return Err(RegistryError::InvalidRange {
                model: model.to_string(),
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}
