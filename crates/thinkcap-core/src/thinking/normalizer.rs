//! Thinking budget normalization against registry ranges.
//!
//! Normalization shapes the budget, it never rejects it: every
//! `(model, budget)` pair yields a value to send upstream.

use thinkcap_types::{ThinkingSupport, DYNAMIC_BUDGET};

use super::adapter::{has_thinking_capability, lookup_thinking_range};
use crate::registry::{global_registry, CapabilityRegistry};

/// Why a budget came out the way it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetAdjustment {
    /// No thinking metadata; requested value passed through.
    NoMetadata,
    /// Requested value already legal.
    Unchanged,
    /// Dynamic requested and supported.
    DynamicKept,
    /// Dynamic unsupported; range midpoint substituted.
    DynamicToMidpoint,
    /// Dynamic unsupported, midpoint not positive; zero substituted.
    DynamicToZero,
    /// Dynamic unsupported, midpoint not positive, zero illegal; min substituted.
    DynamicToMin,
    /// Zero requested but illegal; min substituted.
    ZeroToMin,
    ClampedToMin,
    ClampedToMax,
}

impl BudgetAdjustment {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NoMetadata => "no_metadata",
            Self::Unchanged => "unchanged",
            Self::DynamicKept => "dynamic_kept",
            Self::DynamicToMidpoint => "dynamic_to_midpoint",
            Self::DynamicToZero => "dynamic_to_zero",
            Self::DynamicToMin => "dynamic_to_min",
            Self::ZeroToMin => "zero_to_min",
            Self::ClampedToMin => "clamped_to_min",
            Self::ClampedToMax => "clamped_to_max",
        }
    }

    /// True when the effective budget differs in kind or value from the request.
    pub fn is_substitution(self) -> bool {
        !matches!(self, Self::NoMetadata | Self::Unchanged | Self::DynamicKept)
    }
}

impl std::fmt::Display for BudgetAdjustment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `(min + max) / 2`, truncating toward zero, without overflow.
fn midpoint(min: i64, max: i64) -> i64 {
    let mid = (i128::from(min) + i128::from(max)) / 2;
    i64::try_from(mid).unwrap_or(min)
}

/// Resolve `budget` against a known range.
pub fn resolve_budget(range: &ThinkingSupport, budget: i64) -> (i64, BudgetAdjustment) {
    if budget == DYNAMIC_BUDGET {
        if range.dynamic_allowed {
            return (DYNAMIC_BUDGET, BudgetAdjustment::DynamicKept);
        }
        let mid = midpoint(range.min, range.max);
        if mid <= 0 && range.zero_allowed {
            return (0, BudgetAdjustment::DynamicToZero);
        }
        if mid <= 0 {
            return (range.min, BudgetAdjustment::DynamicToMin);
        }
        return (mid, BudgetAdjustment::DynamicToMidpoint);
    }

    if budget == 0 {
        if range.zero_allowed {
            return (0, BudgetAdjustment::Unchanged);
        }
        return (range.min, BudgetAdjustment::ZeroToMin);
    }
    if range.contains(budget) {
        return (budget, BudgetAdjustment::Unchanged);
    }
    if budget < range.min {
        return (range.min, BudgetAdjustment::ClampedToMin);
    }
    (range.max, BudgetAdjustment::ClampedToMax)
}

/// Normalizer bound to a capability registry handle.
#[derive(Debug, Clone)]
pub struct BudgetNormalizer<R> {
    registry: R,
}

impl<R: CapabilityRegistry> BudgetNormalizer<R> {
    pub fn new(registry: R) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Effective budget plus the reason for it.
    pub fn normalize_with_reason(&self, model: &str, budget: i64) -> (i64, BudgetAdjustment) {
        let Some(range) = lookup_thinking_range(&self.registry, model) else {
            return (budget, BudgetAdjustment::NoMetadata);
        };

        let (effective, adjustment) = resolve_budget(&range, budget);
        if adjustment.is_substitution() {
            tracing::debug!(
                model = %model,
                requested = budget,
                effective,
                min = range.min,
                max = range.max,
                reason = adjustment.as_str(),
                "[Thinking] Budget adjusted"
            );
        }
        (effective, adjustment)
    }

    /// Budget that is legal to send for `model`.
    pub fn normalize(&self, model: &str, budget: i64) -> i64 {
        self.normalize_with_reason(model, budget).0
    }

    pub fn supports_thinking(&self, model: &str) -> bool {
        has_thinking_capability(&self.registry, model)
    }
}

/// Normalize against the process-wide registry.
pub fn normalize_thinking_budget(model: &str, budget: i64) -> i64 {
    BudgetNormalizer::new(global_registry()).normalize(model, budget)
}

/// Thinking capability according to the process-wide registry.
pub fn model_supports_thinking(model: &str) -> bool {
    has_thinking_capability(global_registry(), model)
}
