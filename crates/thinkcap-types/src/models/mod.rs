//! Core domain models for thinkcap.

mod config;
mod model_info;
mod thinking;

pub use config::{NameRule, PatternKind, ProviderRules, ThinkcapConfig};
pub use model_info::{ModelInfo, Provider};
pub use thinking::{ThinkingSupport, DEFAULT_THINKING_BUDGET, DYNAMIC_BUDGET};
