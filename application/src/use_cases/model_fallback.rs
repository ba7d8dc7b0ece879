//! Model fallback executor.
//!
//! Tries each model in priority order until one produces a non-empty answer.
//! Attempts are strictly sequential: each one settles (answer, error, or
//! deadline) before the next model is tried. Worst-case latency is therefore
//! `models.len() * attempt_timeout`.

use crate::config::ExecutionParams;
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::{AttemptProgressNotifier, NoProgress};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};
use visa_advisor_domain::util::truncate_str;
use visa_advisor_domain::{Model, Prompt};

/// Why a single model attempt failed
#[derive(Error, Debug)]
pub enum AttemptError {
    #[error("timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// The call succeeded but carried no text. Treated like any other
    /// failure so callers only need to check one outcome.
    #[error("model returned empty content")]
    EmptyResponse,
}

/// Aggregate failure of the whole chain
#[derive(Error, Debug)]
pub enum FallbackError {
    #[error("No models configured")]
    NoModels,

    #[error("All {attempts} models failed; last error: {last_cause}")]
    Exhausted {
        attempts: usize,
        last_cause: AttemptError,
    },
}

/// The first successful attempt
#[derive(Debug, Clone)]
pub struct FallbackSuccess {
    pub model: Model,
    pub content: String,
    /// Number of models tried, including the successful one
    pub attempts: usize,
}

/// Walks an ordered model list against the completion gateway.
pub struct ModelFallbackExecutor {
    gateway: Arc<dyn LlmGateway>,
    attempt_timeout: Duration,
}

impl Clone for ModelFallbackExecutor {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            attempt_timeout: self.attempt_timeout,
        }
    }
}

impl ModelFallbackExecutor {
    pub fn new(gateway: Arc<dyn LlmGateway>, attempt_timeout: Duration) -> Self {
        Self {
            gateway,
            attempt_timeout,
        }
    }

    pub fn from_params(gateway: Arc<dyn LlmGateway>, params: &ExecutionParams) -> Self {
        Self::new(gateway, params.attempt_timeout)
    }

    pub fn attempt_timeout(&self) -> Duration {
        self.attempt_timeout
    }

    /// Execute with default (no-op) progress
    pub async fn execute(
        &self,
        prompt: &Prompt,
        models: &[Model],
    ) -> Result<FallbackSuccess, FallbackError> {
        self.execute_with_progress(prompt, models, &NoProgress).await
    }

    /// Try `models` in order; first success wins.
    pub async fn execute_with_progress(
        &self,
        prompt: &Prompt,
        models: &[Model],
        progress: &dyn AttemptProgressNotifier,
    ) -> Result<FallbackSuccess, FallbackError> {
        let mut last_cause = None;

        for (index, model) in models.iter().enumerate() {
            progress.on_attempt_start(model, index, models.len());
            debug!(
                "Attempt {}/{} with model {}",
                index + 1,
                models.len(),
                model
            );

            match self.attempt(model, prompt).await {
                Ok(content) => {
                    progress.on_attempt_complete(model, true);
                    info!("Model {} answered ({} bytes)", model, content.len());
                    return Ok(FallbackSuccess {
                        model: model.clone(),
                        content,
                        attempts: index + 1,
                    });
                }
                Err(e) => {
                    progress.on_attempt_complete(model, false);
                    warn!("Model {} failed: {}", model, e);
                    last_cause = Some(e);
                }
            }
        }

        match last_cause {
            Some(last_cause) => Err(FallbackError::Exhausted {
                attempts: models.len(),
                last_cause,
            }),
            None => Err(FallbackError::NoModels),
        }
    }

    /// One attempt raced against the deadline. If the deadline wins, the
    /// in-flight call is dropped; nothing is sent upstream to cancel it.
    async fn attempt(&self, model: &Model, prompt: &Prompt) -> Result<String, AttemptError> {
        let content = match tokio::time::timeout(self.attempt_timeout, self.send_once(model, prompt))
            .await
        {
            Ok(result) => result?,
            Err(_) => return Err(AttemptError::Timeout(self.attempt_timeout)),
        };

        if content.trim().is_empty() {
            return Err(AttemptError::EmptyResponse);
        }

        tracing::trace!("Model {} response preview: {}", model, truncate_str(&content, 500));
        Ok(content)
    }

    async fn send_once(&self, model: &Model, prompt: &Prompt) -> Result<String, GatewayError> {
        let session = self
            .gateway
            .create_session_with_system_prompt(model, &prompt.instruction)
            .await?;
        session.send(&prompt.user).await
    }
}
