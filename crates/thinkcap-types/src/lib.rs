//! # Thinkcap Types
//!
//! Capability records, classifier rule tables, and error definitions shared by
//! the thinkcap crates.
//!
//! - **`error`** - Typed error hierarchy for configuration and registry data
//! - **`models`** - Domain models (ModelInfo, ThinkingSupport, classifier rules, config)
//!
//! ## Architecture Role
//!
//! ```text
//!        thinkcap-types (this crate)
//!                │
//!                ▼
//!          thinkcap-core
//!                │
//!                ▼
//!          thinkcap-cli
//! ```
//!
//! Everything here is plain data: serializable, cheap to clone, and free of
//! shared state, so it can be handed to any number of request tasks.

pub mod error;
pub mod models;

// Re-export error types for convenience
pub use error::{ConfigError, RegistryError, Result, TypedError};

// Re-export core model types
pub use models::{
    ModelInfo, NameRule, PatternKind, Provider, ProviderRules, ThinkcapConfig, ThinkingSupport,
    DEFAULT_THINKING_BUDGET, DYNAMIC_BUDGET,
};
