//! Registry lookups reduced to "thinking range or nothing".

use thinkcap_types::ThinkingSupport;

use crate::registry::CapabilityRegistry;

/// Thinking range for `model`, or `None` when the model is unknown or has no
/// thinking metadata. Empty names never reach the registry.
pub fn lookup_thinking_range<R>(registry: &R, model: &str) -> Option<ThinkingSupport>
where
    R: CapabilityRegistry + ?Sized,
{
    if model.is_empty() {
        return None;
    }
    registry.thinking_support(model)
}

/// True iff the registry carries thinking metadata for `model`.
pub fn has_thinking_capability<R>(registry: &R, model: &str) -> bool
where
    R: CapabilityRegistry + ?Sized,
{
    lookup_thinking_range(registry, model).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use thinkcap_types::{ModelInfo, Provider};

    /// Counts lookups so tests can tell whether the registry was consulted.
    #[derive(Default)]
    struct CountingRegistry {
        calls: AtomicUsize,
    }

    impl CapabilityRegistry for CountingRegistry {
        fn model_info(&self, model: &str) -> Option<ModelInfo> {
            self.calls.fetch_add(1, Ordering::Relaxed);
            match model {
                "plain" => Some(ModelInfo::new(model, Provider::Gemini)),
                "thinker" => Some(
                    ModelInfo::new(model, Provider::Gemini)
                        .with_thinking(ThinkingSupport::new(0, 0, false, false)),
                ),
                _ => None,
            }
        }
    }

    #[test]
    fn test_empty_name_skips_registry() {
        let registry = CountingRegistry::default();
        assert!(lookup_thinking_range(&registry, "").is_none());
        assert!(!has_thinking_capability(&registry, ""));
        assert_eq!(registry.calls.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn test_unknown_and_plain_models_not_found() {
        let registry = CountingRegistry::default();
        assert!(lookup_thinking_range(&registry, "missing").is_none());
        assert!(lookup_thinking_range(&registry, "plain").is_none());
        assert_eq!(registry.calls.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn test_capability_independent_of_range_values() {
        let registry = CountingRegistry::default();
        assert!(has_thinking_capability(&registry, "thinker"));
        assert_eq!(
            lookup_thinking_range(&registry, "thinker"),
            Some(ThinkingSupport::new(0, 0, false, false))
        );
    }
}
