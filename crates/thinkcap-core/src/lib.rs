//! # Thinkcap Core
//!
//! Decides how "thinking" is configured on requests leaving the proxy.
//!
//! ```text
//! thinkcap-core/src/
//! ├── thinking/
//! │   ├── classifier.rs  # provider naming rules
//! │   ├── adapter.rs     # registry -> Option<ThinkingSupport>
//! │   └── normalizer.rs  # effective budget
//! ├── registry/          # CapabilityRegistry trait + DashMap-backed ModelRegistry
//! └── modules/           # config file, logging
//! ```
//!
//! Classification and normalization are total: they return a value for every
//! input and never touch shared state other than the registry's read API.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod error;
pub mod modules;
pub mod registry;
pub mod thinking;

pub use error::{AppError, AppResult};
pub use registry::{global_registry, CapabilityRegistry, ModelRegistry};
pub use thinking::{
    has_thinking_capability, is_antigravity_claude_model, is_antigravity_thinking_model,
    is_special_handling_family, is_thinking_enabled_for_provider, lookup_thinking_range,
    model_supports_thinking, normalize_thinking_budget, BudgetAdjustment, BudgetNormalizer,
    ModelClassifier,
};
pub use thinkcap_types::{DEFAULT_THINKING_BUDGET, DYNAMIC_BUDGET};
