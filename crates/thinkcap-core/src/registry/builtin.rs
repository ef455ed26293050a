//! Builtin capability table.

use thinkcap_types::{ModelInfo, Provider, ThinkingSupport};

const GEMINI_PRO: ThinkingSupport = ThinkingSupport::new(128, 32768, false, true);
const GEMINI_FLASH: ThinkingSupport = ThinkingSupport::new(0, 24576, true, true);
const GEMINI_FLASH_LITE: ThinkingSupport = ThinkingSupport::new(512, 24576, true, true);
const CLAUDE_THINKING: ThinkingSupport = ThinkingSupport::new(1024, 200_000, false, true);

/// Models known without any configuration.
///
/// Image and plain Claude variants are listed without thinking metadata.
pub fn builtin_models() -> Vec<ModelInfo> {
    let antigravity = |id: &str, name: &str, owner: &str| {
        ModelInfo::new(id, Provider::Antigravity).with_display_name(name).with_owner(owner)
    };

    vec![
        antigravity("gemini-2.5-pro", "Gemini 2.5 Pro", "google").with_thinking(GEMINI_PRO),
        antigravity("gemini-2.5-pro-image", "Gemini 2.5 Pro Image", "google")
            .with_thinking(GEMINI_PRO),
        antigravity("gemini-2.5-flash", "Gemini 2.5 Flash", "google").with_thinking(GEMINI_FLASH),
        antigravity("gemini-2.5-flash-lite", "Gemini 2.5 Flash Lite", "google")
            .with_thinking(GEMINI_FLASH_LITE),
        antigravity("gemini-2.5-flash-image", "Gemini 2.5 Flash Image", "google"),
        antigravity("gemini-3-pro-preview", "Gemini 3 Pro Preview", "google")
            .with_thinking(GEMINI_PRO),
        antigravity("gemini-3-pro-high", "Gemini 3 Pro (High)", "google").with_thinking(GEMINI_PRO),
        antigravity("gemini-3-pro-low", "Gemini 3 Pro (Low)", "google").with_thinking(GEMINI_PRO),
        antigravity("gemini-3-pro-image", "Gemini 3 Pro Image", "google"),
        antigravity("claude-sonnet-4-5", "Claude Sonnet 4.5", "anthropic"),
        antigravity("claude-sonnet-4-5-thinking", "Claude Sonnet 4.5 Thinking", "anthropic")
            .with_thinking(CLAUDE_THINKING),
        antigravity("claude-opus-4-5-thinking", "Claude Opus 4.5 Thinking", "anthropic")
            .with_thinking(CLAUDE_THINKING),
    ]
}
