//! Capability registry entries and provider identifiers.

use serde::{Deserialize, Serialize};

use super::thinking::ThinkingSupport;
use crate::error::RegistryError;

/// Backend provider a request is routed through.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    /// Antigravity (Gemini and Claude models behind one upstream)
    Antigravity,
    /// Google Gemini API
    Gemini,
    /// Anthropic Claude API
    Claude,
    /// Provider not recognized
    #[default]
    Unknown,
}

impl Provider {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Antigravity => "antigravity",
            Self::Gemini => "gemini",
            Self::Claude => "claude",
            Self::Unknown => "unknown",
        }
    }

    /// Parse a provider name; anything unrecognized maps to `Unknown`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "antigravity" => Self::Antigravity,
            "gemini" => Self::Gemini,
            "claude" => Self::Claude,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One model known to the capability registry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModelInfo {
    /// Exact model identifier used for lookups.
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owned_by: Option<String>,
    #[serde(default)]
    pub provider: Provider,
    /// Thinking range; `None` means the model does not support thinking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thinking: Option<ThinkingSupport>,
}

impl ModelInfo {
    pub fn new(id: impl Into<String>, provider: Provider) -> Self {
        Self { id: id.into(), display_name: None, owned_by: None, provider, thinking: None }
    }

    #[must_use]
    pub fn with_thinking(mut self, thinking: ThinkingSupport) -> Self {
        self.thinking = Some(thinking);
        self
    }

    #[must_use]
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owned_by = Some(owner.into());
        self
    }

    #[inline]
    pub fn supports_thinking(&self) -> bool {
        self.thinking.is_some()
    }

    pub fn validate(&self) -> Result<(), RegistryError> {
        if self.id.is_empty() {
            return Err(RegistryError::EmptyModelId);
        }
        match &self.thinking {
            Some(thinking) => thinking.validate(&self.id),
            None => Ok(()),
        }
    }
}
