//! Name-pattern rule tables used by the model classifier.

use serde::{Deserialize, Serialize};

use crate::models::Provider;

/// How a rule's pattern is compared against a model name.
///
/// All comparisons are case-sensitive and operate on the raw name.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    Exact,
    Prefix,
    Suffix,
    Contains,
}

/// A single `(kind, pattern)` entry in a provider's rule table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NameRule {
    pub kind: PatternKind,
    pub pattern: String,
}

impl NameRule {
    pub fn new(kind: PatternKind, pattern: impl Into<String>) -> Self {
        Self { kind, pattern: pattern.into() }
    }

    pub fn exact(pattern: impl Into<String>) -> Self {
        Self::new(PatternKind::Exact, pattern)
    }

    pub fn prefix(pattern: impl Into<String>) -> Self {
        Self::new(PatternKind::Prefix, pattern)
    }

    pub fn suffix(pattern: impl Into<String>) -> Self {
        Self::new(PatternKind::Suffix, pattern)
    }

    pub fn contains(pattern: impl Into<String>) -> Self {
        Self::new(PatternKind::Contains, pattern)
    }

    pub fn matches(&self, model: &str) -> bool {
        let pattern = self.pattern.as_str();
        match self.kind {
            PatternKind::Exact => model == pattern,
            PatternKind::Prefix => model.starts_with(pattern),
            PatternKind::Suffix => model.ends_with(pattern),
            PatternKind::Contains => model.contains(pattern),
        }
    }
}

/// Ordered rule tables for one provider.
///
/// `thinking` decides whether thinking is switched on for a model routed
/// through the provider. `special_handling` flags model families whose
/// payload must be altered when thinking is on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProviderRules {
    pub provider: Provider,
    #[serde(default)]
    pub thinking: Vec<NameRule>,
    #[serde(default)]
    pub special_handling: Vec<NameRule>,
}

impl ProviderRules {
    pub fn new(provider: Provider) -> Self {
        Self { provider, thinking: Vec::new(), special_handling: Vec::new() }
    }

    /// First matching rule in the thinking table, if any.
    pub fn thinking_match(&self, model: &str) -> Option<&NameRule> {
        self.thinking.iter().find(|rule| rule.matches(model))
    }

    pub fn is_thinking_model(&self, model: &str) -> bool {
        self.thinking_match(model).is_some()
    }

    pub fn needs_special_handling(&self, model: &str) -> bool {
        self.special_handling.iter().any(|rule| rule.matches(model))
    }

    pub fn rules(&self) -> impl Iterator<Item = &NameRule> {
        self.thinking.iter().chain(self.special_handling.iter())
    }
}
