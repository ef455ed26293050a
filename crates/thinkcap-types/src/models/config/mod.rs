//! Configuration file model.

mod rules;

pub use rules::{NameRule, PatternKind, ProviderRules};

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::model_info::ModelInfo;
use super::thinking::{DEFAULT_THINKING_BUDGET, DYNAMIC_BUDGET};
use crate::error::{ConfigError, RegistryError, TypedError};

/// Top-level thinkcap configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThinkcapConfig {
    /// Budget used when thinking is switched on without a requested value.
    #[serde(default = "default_budget")]
    pub default_budget: i64,
    /// Seed the registry with the builtin model table before applying `models`.
    #[serde(default = "default_true")]
    pub include_builtin_models: bool,
    /// Extra or overriding registry entries.
    #[serde(default)]
    pub models: Vec<ModelInfo>,
    /// Classifier tables; each replaces the builtin table of its provider.
    #[serde(default)]
    pub providers: Vec<ProviderRules>,
}

fn default_budget() -> i64 {
    DEFAULT_THINKING_BUDGET
}

fn default_true() -> bool {
    true
}

impl Default for ThinkcapConfig {
    fn default() -> Self {
        Self {
            default_budget: DEFAULT_THINKING_BUDGET,
            include_builtin_models: true,
            models: Vec::new(),
            providers: Vec::new(),
        }
    }
}

impl ThinkcapConfig {
    /// Check the whole file before anything is registered.
    pub fn validate(&self) -> crate::Result<()> {
        if self.default_budget < DYNAMIC_BUDGET {
            return Err(ConfigError::ValidationError {
                field: "default_budget".to_string(),
                message: format!("{} is below {}", self.default_budget, DYNAMIC_BUDGET),
            }
            .into());
        }

        let mut seen = HashSet::with_capacity(self.models.len());
        for model in &self.models {
            model.validate()?;
            if !seen.insert(model.id.as_str()) {
                return Err(TypedError::from(RegistryError::DuplicateModel {
                    model: model.id.clone(),
                }));
            }
        }

        for table in &self.providers {
            if table.rules().any(|rule| rule.pattern.is_empty()) {
                return Err(ConfigError::ValidationError {
                    field: format!("providers.{}", table.provider),
                    message: "empty pattern matches every model".to_string(),
                }
                .into());
            }
        }
        Ok(())
    }
}
