//! Provider naming-convention classifier.
//!
//! Some providers expose thinking only through model naming, not through
//! capability metadata. Each provider's conventions live in an ordered
//! [`ProviderRules`] table; the builtin tables can be replaced from config.

use std::collections::HashMap;
use std::sync::LazyLock;

use thinkcap_types::{NameRule, Provider, ProviderRules, ThinkcapConfig};

fn antigravity_rules() -> ProviderRules {
    ProviderRules {
        provider: Provider::Antigravity,
        thinking: vec![
            NameRule::suffix("-thinking"),
            NameRule::exact("gemini-2.5-pro"),
            NameRule::exact("gemini-2.5-pro-image"),
            NameRule::prefix("gemini-3-pro-"),
        ],
        special_handling: vec![NameRule::contains("claude")],
    }
}

static BUILTIN_CLASSIFIER: LazyLock<ModelClassifier> = LazyLock::new(ModelClassifier::builtins);

/// Per-provider rule tables.
#[derive(Debug, Clone, Default)]
pub struct ModelClassifier {
    tables: HashMap<Provider, ProviderRules>,
}

impl ModelClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builtins() -> Self {
        let mut classifier = Self::new();
        classifier.set_rules(antigravity_rules());
        classifier
    }

    /// Builtin tables with every provider table from `config` swapped in.
    pub fn from_config(config: &ThinkcapConfig) -> Self {
        let mut classifier = Self::builtins();
        for table in &config.providers {
            classifier.set_rules(table.clone());
        }
        classifier
    }

    /// Install `rules` for its provider, returning the table it replaced.
    pub fn set_rules(&mut self, rules: ProviderRules) -> Option<ProviderRules> {
        self.tables.insert(rules.provider, rules)
    }

    pub fn rules(&self, provider: Provider) -> Option<&ProviderRules> {
        self.tables.get(&provider)
    }

    /// Whether thinking should be switched on for `model` under `provider`.
    ///
    /// Providers without a table never enable thinking.
    pub fn is_thinking_enabled(&self, provider: Provider, model: &str) -> bool {
        self.tables.get(&provider).is_some_and(|rules| rules.is_thinking_model(model))
    }

    /// Whether `model` belongs to a family whose payload needs adjusting
    /// when thinking is on (Antigravity: Claude models lose `topP`).
    pub fn needs_special_handling(&self, provider: Provider, model: &str) -> bool {
        self.tables.get(&provider).is_some_and(|rules| rules.needs_special_handling(model))
    }
}

/// Builtin-table check for any provider.
pub fn is_thinking_enabled_for_provider(provider: Provider, model: &str) -> bool {
    BUILTIN_CLASSIFIER.is_thinking_enabled(provider, model)
}

/// Thinking is on for `*-thinking`, `gemini-2.5-pro`, `gemini-2.5-pro-image`
/// and `gemini-3-pro-*` when routed through Antigravity.
pub fn is_antigravity_thinking_model(model: &str) -> bool {
    is_thinking_enabled_for_provider(Provider::Antigravity, model)
}

/// Substring check for the Claude family marker.
pub fn is_special_handling_family(model: &str) -> bool {
    BUILTIN_CLASSIFIER.needs_special_handling(Provider::Antigravity, model)
}

pub fn is_antigravity_claude_model(model: &str) -> bool {
    is_special_handling_family(model)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thinking_suffix() {
        assert!(is_antigravity_thinking_model("foo-thinking"));
        assert!(is_antigravity_thinking_model("claude-sonnet-4-5-thinking"));
        assert!(!is_antigravity_thinking_model("foo-thinking-v2"));
    }

    #[test]
    fn test_always_thinking_names() {
        assert!(is_antigravity_thinking_model("gemini-2.5-pro"));
        assert!(is_antigravity_thinking_model("gemini-2.5-pro-image"));
        assert!(!is_antigravity_thinking_model("gemini-2.5-pro-preview"));
        assert!(!is_antigravity_thinking_model("gemini-2.5-flash"));
    }

    #[test]
    fn test_gemini_3_pro_prefix() {
        assert!(is_antigravity_thinking_model("gemini-3-pro-x"));
        assert!(is_antigravity_thinking_model("gemini-3-pro-high"));
        assert!(!is_antigravity_thinking_model("gemini-3-pro"));
        assert!(!is_antigravity_thinking_model("gemini-3-flash"));
    }

    #[test]
    fn test_unknown_and_empty_names() {
        assert!(!is_antigravity_thinking_model("random-model"));
        assert!(!is_antigravity_thinking_model(""));
        assert!(!is_special_handling_family(""));
    }

    #[test]
    fn test_no_normalization_of_names() {
        assert!(!is_antigravity_thinking_model("Gemini-2.5-Pro"));
        assert!(!is_antigravity_thinking_model("gemini-2.5-pro "));
        assert!(!is_antigravity_thinking_model("foo-Thinking"));
    }

    #[test]
    fn test_claude_family_is_substring_match() {
        assert!(is_special_handling_family("anthropic-claude-v3"));
        assert!(is_special_handling_family("claude-opus-4-5-thinking"));
        assert!(is_antigravity_claude_model("my-claude"));
        assert!(!is_special_handling_family("gemini-pro"));
        assert!(!is_special_handling_family("Claude-3"));
    }

    #[test]
    fn test_provider_without_table() {
        assert!(!is_thinking_enabled_for_provider(Provider::Gemini, "foo-thinking"));
        assert!(!is_thinking_enabled_for_provider(Provider::Unknown, "gemini-2.5-pro"));
    }

    #[test]
    fn test_config_table_replaces_builtin() {
        let mut custom = ProviderRules::new(Provider::Antigravity);
        custom.thinking.push(NameRule::suffix("-reasoning"));
        let config = ThinkcapConfig { providers: vec![custom], ..Default::default() };
        let classifier = ModelClassifier::from_config(&config);

        assert!(classifier.is_thinking_enabled(Provider::Antigravity, "x-reasoning"));
        assert!(!classifier.is_thinking_enabled(Provider::Antigravity, "foo-thinking"));
        assert!(!classifier.needs_special_handling(Provider::Antigravity, "claude-opus"));
    }

    #[test]
    fn test_config_adds_new_provider() {
        let mut gemini = ProviderRules::new(Provider::Gemini);
        gemini.thinking.push(NameRule::prefix("gemini-2.5-"));
        let config = ThinkcapConfig { providers: vec![gemini], ..Default::default() };
        let classifier = ModelClassifier::from_config(&config);

        assert!(classifier.is_thinking_enabled(Provider::Gemini, "gemini-2.5-flash"));
        assert!(classifier.is_thinking_enabled(Provider::Antigravity, "gemini-2.5-pro"));
        assert!(classifier.rules(Provider::Claude).is_none());
    }
}
