//! OpenRouter LLM Gateway implementation

use super::error::OpenRouterError;
use super::session::OpenRouterSession;
use crate::config::FileProviderConfig;
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use visa_advisor_application::{GatewayError, LlmGateway, LlmSession};
use visa_advisor_domain::{Locale, Model};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for the chat completions endpoint.
#[derive(Clone)]
pub struct OpenRouterSettings {
    pub api_key: String,
    pub base_url: String,
    pub referer: String,
    pub title: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl OpenRouterSettings {
    /// Build settings from the `[provider]` section.
    ///
    /// Returns `None` when no API key is configured. `locale` picks the
    /// default `X-Title` when none is configured.
    pub fn from_config(config: &FileProviderConfig, locale: Locale) -> Option<Self> {
        let api_key = config.resolve_api_key()?;
        Some(Self {
            api_key,
            base_url: config.base_url.clone(),
            referer: config.referer.clone(),
            title: config.title_for(locale),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        })
    }

    pub(super) fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

impl std::fmt::Debug for OpenRouterSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenRouterSettings")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("referer", &self.referer)
            .field("title", &self.title)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .finish()
    }
}

/// LLM Gateway backed by OpenRouter.
///
/// Holds one pooled `reqwest::Client` shared by every session.
pub struct OpenRouterGateway {
    client: reqwest::Client,
    settings: Arc<OpenRouterSettings>,
}

impl OpenRouterGateway {
    pub fn new(settings: OpenRouterSettings) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .default_headers(Self::default_headers(&settings)?)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        info!(base_url = %settings.base_url, "OpenRouterGateway initialized");

        Ok(Self {
            client,
            settings: Arc::new(settings),
        })
    }

    /// Build a gateway from config, or `Ok(None)` when no API key is set.
    pub fn from_config(
        config: &FileProviderConfig,
        locale: Locale,
    ) -> Result<Option<Self>, GatewayError> {
        OpenRouterSettings::from_config(config, locale)
            .map(Self::new)
            .transpose()
    }

    pub fn settings(&self) -> &OpenRouterSettings {
        &self.settings
    }

    fn default_headers(settings: &OpenRouterSettings) -> Result<HeaderMap, OpenRouterError> {
        let mut headers = HeaderMap::new();

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", settings.api_key))
            .map_err(|_| OpenRouterError::InvalidHeader("Authorization"))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        headers.insert(
            HeaderName::from_static("http-referer"),
            HeaderValue::from_str(&settings.referer)
                .map_err(|_| OpenRouterError::InvalidHeader("HTTP-Referer"))?,
        );
        headers.insert(
            HeaderName::from_static("x-title"),
            HeaderValue::from_str(&settings.title)
                .map_err(|_| OpenRouterError::InvalidHeader("X-Title"))?,
        );

        Ok(headers)
    }
}

#[async_trait]
impl LlmGateway for OpenRouterGateway {
    async fn create_session_with_system_prompt(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        Ok(Box::new(OpenRouterSession::new(
            self.client.clone(),
            Arc::clone(&self.settings),
            model.clone(),
            system_prompt.to_string(),
        )))
    }
}
