//! Thinking mode decisions for outgoing requests.
//!
//! - `classifier` - provider naming rules (is thinking on, does the payload need adjusting)
//! - `adapter` - registry lookup reduced to `Option<ThinkingSupport>`
//! - `normalizer` - effective budget for a model and requested value

pub mod adapter;
pub mod classifier;
pub mod normalizer;

#[cfg(test)]
mod tests;

pub use adapter::{has_thinking_capability, lookup_thinking_range};
pub use classifier::{
    is_antigravity_claude_model, is_antigravity_thinking_model, is_special_handling_family,
    is_thinking_enabled_for_provider, ModelClassifier,
};
pub use normalizer::{
    model_supports_thinking, normalize_thinking_budget, resolve_budget, BudgetAdjustment,
    BudgetNormalizer,
};
