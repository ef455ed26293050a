//! Model capability registry.
//!
//! The registry is the single source of truth for thinking ranges. Readers go
//! through [`CapabilityRegistry`], so the normalizer can be handed any
//! implementation (the shared [`ModelRegistry`], or a fixed table in tests).
//! [`ModelRegistry`] is backed by a `DashMap` and can be read from any number
//! of request tasks while it is being maintained.

mod builtin;

pub use builtin::builtin_models;

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, OnceLock};

use dashmap::DashMap;
use thinkcap_types::{ModelInfo, RegistryError, ThinkcapConfig, ThinkingSupport};

/// Read-only view of a capability registry.
pub trait CapabilityRegistry: Send + Sync {
    /// Full record for an exact model id.
    fn model_info(&self, model: &str) -> Option<ModelInfo>;

    /// Thinking metadata for an exact model id.
    fn thinking_support(&self, model: &str) -> Option<ThinkingSupport> {
        self.model_info(model).and_then(|info| info.thinking)
    }
}

impl<R: CapabilityRegistry + ?Sized> CapabilityRegistry for &R {
    fn model_info(&self, model: &str) -> Option<ModelInfo> {
        (**self).model_info(model)
    }

    fn thinking_support(&self, model: &str) -> Option<ThinkingSupport> {
        (**self).thinking_support(model)
    }
}

impl<R: CapabilityRegistry + ?Sized> CapabilityRegistry for Arc<R> {
    fn model_info(&self, model: &str) -> Option<ModelInfo> {
        (**self).model_info(model)
    }

    fn thinking_support(&self, model: &str) -> Option<ThinkingSupport> {
        (**self).thinking_support(model)
    }
}

/// Concurrent in-memory registry keyed by exact model id.
#[derive(Debug, Default)]
pub struct ModelRegistry {
    models: DashMap<String, ModelInfo>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry seeded with the builtin model table.
    pub fn builtins() -> Self {
        let registry = Self::new();
        for info in builtin_models() {
            registry.models.insert(info.id.clone(), info);
        }
        registry
    }

    /// Build a registry from config: builtins (unless disabled), then config entries.
    pub fn from_config(config: &ThinkcapConfig) -> Result<Self, RegistryError> {
        let registry = Self::new();
        registry.reload(config)?;
        Ok(registry)
    }

    /// Replace the contents with what `config` describes.
    ///
    /// Entries are validated before the current contents are touched. Ids kept
    /// across the reload stay readable throughout; only ids absent from the new
    /// table disappear, and only after every new entry is in place.
    pub fn reload(&self, config: &ThinkcapConfig) -> Result<(), RegistryError> {
        for info in &config.models {
            info.validate()?;
        }

        let mut next: HashMap<String, ModelInfo> = HashMap::new();
        if config.include_builtin_models {
            next.extend(builtin_models().into_iter().map(|info| (info.id.clone(), info)));
        }
        next.extend(config.models.iter().map(|info| (info.id.clone(), info.clone())));

        let keep: HashSet<String> = next.keys().cloned().collect();
        for (id, info) in next {
            self.models.insert(id, info);
        }
        self.models.retain(|id, _| keep.contains(id));

        tracing::debug!(
            "[Registry] Reloaded: {} model(s), builtins={}",
            self.models.len(),
            config.include_builtin_models
        );
        Ok(())
    }

    /// Add or replace a record. Returns the previous record for the same id.
    pub fn register(&self, info: ModelInfo) -> Result<Option<ModelInfo>, RegistryError> {
        info.validate()?;
        tracing::debug!(
            "[Registry] Register {} (thinking: {})",
            info.id,
            if info.supports_thinking() { "yes" } else { "no" }
        );
        Ok(self.models.insert(info.id.clone(), info))
    }

    pub fn unregister(&self, model: &str) -> Option<ModelInfo> {
        let removed = self.models.remove(model).map(|(_, info)| info);
        if removed.is_some() {
            tracing::debug!("[Registry] Unregister {}", model);
        }
        removed
    }

    pub fn get(&self, model: &str) -> Option<ModelInfo> {
        self.models.get(model).map(|entry| entry.value().clone())
    }

    pub fn contains(&self, model: &str) -> bool {
        self.models.contains_key(model)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// All registered ids, sorted.
    pub fn model_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.models.iter().map(|entry| entry.key().clone()).collect();
        ids.sort_unstable();
        ids
    }

    /// Snapshot of all records, sorted by id.
    pub fn snapshot(&self) -> Vec<ModelInfo> {
        let mut models: Vec<ModelInfo> =
            self.models.iter().map(|entry| entry.value().clone()).collect();
        models.sort_by(|a, b| a.id.cmp(&b.id));
        models
    }
}

impl CapabilityRegistry for ModelRegistry {
    fn model_info(&self, model: &str) -> Option<ModelInfo> {
        self.get(model)
    }

    fn thinking_support(&self, model: &str) -> Option<ThinkingSupport> {
        self.models.get(model).and_then(|entry| entry.thinking)
    }
}

static GLOBAL_REGISTRY: OnceLock<ModelRegistry> = OnceLock::new();

/// Process-wide registry, seeded with the builtin table on first use.
///
/// Prefer passing a registry handle explicitly; this exists for call sites
/// that have none.
pub fn global_registry() -> &'static ModelRegistry {
    GLOBAL_REGISTRY.get_or_init(ModelRegistry::builtins)
}
