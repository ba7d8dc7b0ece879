//! Completion provider configuration from TOML (`[provider]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;
use visa_advisor_domain::Locale;

/// OpenRouter (OpenAI-compatible) provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Environment variable name for the API key (default: "OPENROUTER_API_KEY").
    pub api_key_env: String,
    /// Direct API key (prefer the env var).
    pub api_key: Option<String>,
    /// Base URL of the chat completions API.
    pub base_url: String,
    /// Sent as `HTTP-Referer` for OpenRouter attribution.
    pub referer: String,
    /// Sent as `X-Title` for OpenRouter attribution. Derived from the
    /// answer locale when unset.
    pub title: Option<String>,
    /// Max tokens per response.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
    /// Per-model deadline in milliseconds.
    pub attempt_timeout_ms: u64,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENROUTER_API_KEY".to_string(),
            api_key: None,
            base_url: "https://openrouter.ai/api/v1".to_string(),
            referer: "https://localhost:3000".to_string(),
            title: None,
            max_tokens: 1000,
            temperature: 0.7,
            attempt_timeout_ms: 15_000,
        }
    }
}

impl FileProviderConfig {
    /// Resolve the API key: explicit `api_key` first, then the env var.
    ///
    /// Empty values count as absent.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| {
                std::env::var(&self.api_key_env)
                    .ok()
                    .filter(|k| !k.trim().is_empty())
            })
    }

    /// `X-Title` for the given locale: the configured title, else a
    /// per-locale default.
    pub fn title_for(&self, locale: Locale) -> String {
        match self.title.as_deref().filter(|t| !t.trim().is_empty()) {
            Some(title) => title.to_string(),
            None => match locale {
                Locale::Zh => "UK Global Talent Visa Assistant - Chinese".to_string(),
                Locale::En => "UK Global Talent Visa Assistant".to_string(),
            },
        }
    }

    pub fn attempt_timeout(&self) -> Duration {
        Duration::from_millis(self.attempt_timeout_ms)
    }
}
