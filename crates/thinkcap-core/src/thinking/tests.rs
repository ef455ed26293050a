use std::collections::HashMap;

use thinkcap_types::{ModelInfo, Provider, ThinkingSupport, DYNAMIC_BUDGET};

use super::*;
use crate::registry::CapabilityRegistry;

/// Fixed table standing in for the shared registry.
struct FixedRegistry(HashMap<&'static str, ThinkingSupport>);

impl FixedRegistry {
    fn with(model: &'static str, range: ThinkingSupport) -> Self {
        Self(HashMap::from([(model, range)]))
    }
}

impl CapabilityRegistry for FixedRegistry {
    fn model_info(&self, model: &str) -> Option<ModelInfo> {
        self.0
            .get(model)
            .map(|range| ModelInfo::new(model, Provider::Unknown).with_thinking(*range))
    }
}

fn normalizer(min: i64, max: i64, zero: bool, dynamic: bool) -> BudgetNormalizer<FixedRegistry> {
    BudgetNormalizer::new(FixedRegistry::with("m", ThinkingSupport::new(min, max, zero, dynamic)))
}

#[test]
fn test_unknown_model_passes_through() {
    let n = normalizer(10, 100, false, false);
    for budget in [-1000, -2, DYNAMIC_BUDGET, 0, 5, 50, 500, i64::MAX, i64::MIN] {
        assert_eq!(n.normalize("other", budget), budget);
        assert_eq!(n.normalize("", budget), budget);
    }
    assert_eq!(n.normalize_with_reason("other", 7).1, BudgetAdjustment::NoMetadata);
}

#[test]
fn test_in_range_is_unchanged() {
    let n = normalizer(10, 100, false, false);
    for budget in 10..=100 {
        assert_eq!(n.normalize("m", budget), budget);
    }
}

#[test]
fn test_clamping() {
    let n = normalizer(10, 100, false, false);
    assert_eq!(n.normalize_with_reason("m", 5), (10, BudgetAdjustment::ClampedToMin));
    assert_eq!(n.normalize_with_reason("m", 500), (100, BudgetAdjustment::ClampedToMax));
    assert_eq!(n.normalize("m", -2), 10);
}

#[test]
fn test_zero_handling() {
    assert_eq!(normalizer(0, 100, true, false).normalize("m", 0), 0);
    assert_eq!(normalizer(128, 1000, true, false).normalize("m", 0), 0);
    assert_eq!(
        normalizer(5, 100, false, false).normalize_with_reason("m", 0),
        (5, BudgetAdjustment::ZeroToMin)
    );
}

#[test]
fn test_dynamic_kept_when_allowed() {
    let n = normalizer(128, 32768, false, true);
    assert_eq!(n.normalize_with_reason("m", -1), (-1, BudgetAdjustment::DynamicKept));
}

#[test]
fn test_dynamic_to_midpoint() {
    let n = normalizer(0, 100, true, false);
    assert_eq!(n.normalize_with_reason("m", -1), (50, BudgetAdjustment::DynamicToMidpoint));
    assert_eq!(normalizer(1, 4, false, false).normalize("m", -1), 2);
}

#[test]
fn test_dynamic_nonpositive_midpoint() {
    assert_eq!(
        normalizer(-10, -2, false, false).normalize_with_reason("m", -1),
        (-10, BudgetAdjustment::DynamicToMin)
    );
    assert_eq!(
        normalizer(-10, -2, true, false).normalize_with_reason("m", -1),
        (0, BudgetAdjustment::DynamicToZero)
    );
    assert_eq!(normalizer(0, 0, false, false).normalize("m", -1), 0);
    assert_eq!(normalizer(0, 1, true, false).normalize("m", -1), 0);
}

#[test]
fn test_midpoint_truncates_toward_zero() {
    // (-3 + 2) / 2 == 0, not -1
    assert_eq!(normalizer(-3, 2, false, false).normalize("m", -1), -3);
    assert_eq!(normalizer(-3, 2, true, false).normalize("m", -1), 0);
}

#[test]
fn test_midpoint_does_not_overflow() {
    let n = normalizer(i64::MAX - 2, i64::MAX, false, false);
    assert_eq!(n.normalize("m", -1), i64::MAX - 1);
}

#[test]
fn test_resolve_budget_direct() {
    let range = ThinkingSupport::new(1024, 200_000, false, true);
    assert_eq!(resolve_budget(&range, 0), (1024, BudgetAdjustment::ZeroToMin));
    assert_eq!(resolve_budget(&range, 4096), (4096, BudgetAdjustment::Unchanged));
    assert!(!BudgetAdjustment::Unchanged.is_substitution());
    assert!(BudgetAdjustment::ClampedToMax.is_substitution());
}

#[test]
fn test_supports_thinking_via_normalizer() {
    let n = normalizer(10, 100, false, false);
    assert!(n.supports_thinking("m"));
    assert!(!n.supports_thinking("other"));
    assert!(!n.supports_thinking(""));
}

#[test]
fn test_global_helpers_use_builtins() {
    assert!(model_supports_thinking("gemini-2.5-flash"));
    assert!(!model_supports_thinking("gemini-2.5-flash-image"));
    assert!(!model_supports_thinking(""));

    assert_eq!(normalize_thinking_budget("gemini-2.5-flash", 30000), 24576);
    assert_eq!(normalize_thinking_budget("gemini-2.5-pro", 0), 128);
    assert_eq!(normalize_thinking_budget("gemini-2.5-pro", -1), -1);
    assert_eq!(normalize_thinking_budget("not-registered", 99), 99);
}

#[test]
fn test_range_bounds_are_legal_values() {
    let range = ThinkingSupport::new(10, 100, false, false);
    assert_eq!(resolve_budget(&range, 10), (10, BudgetAdjustment::Unchanged));
    assert_eq!(resolve_budget(&range, 100), (100, BudgetAdjustment::Unchanged));
    assert_eq!(resolve_budget(&range, 9), (10, BudgetAdjustment::ClampedToMin));
    assert_eq!(resolve_budget(&range, 101), (100, BudgetAdjustment::ClampedToMax));
}
