//! Execution parameters for model fallback.
//!
//! [`ExecutionParams`] groups the static parameters that control how
//! [`ModelFallbackExecutor`](crate::use_cases::model_fallback::ModelFallbackExecutor)
//! walks the model list. These are application-layer concerns, not domain policy.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use visa_advisor_domain::Model;

/// Default per-attempt deadline
pub const DEFAULT_ATTEMPT_TIMEOUT: Duration = Duration::from_millis(15_000);

/// Model fallback parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionParams {
    /// Models to try, most preferred first.
    pub models: Vec<Model>,
    /// Maximum wait for one model before moving on to the next.
    pub attempt_timeout: Duration,
}

impl Default for ExecutionParams {
    fn default() -> Self {
        Self {
            models: Model::default_models(),
            attempt_timeout: DEFAULT_ATTEMPT_TIMEOUT,
        }
    }
}

impl ExecutionParams {
    // ==================== Builder Methods ====================

    pub fn with_models(mut self, models: Vec<Model>) -> Self {
        self.models = models;
        self
    }

    pub fn with_attempt_timeout(mut self, timeout: Duration) -> Self {
        self.attempt_timeout = timeout;
        self
    }

    /// Upper bound on time spent in the model chain
    pub fn worst_case_latency(&self) -> Duration {
        self.attempt_timeout * self.models.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = ExecutionParams::default();
        assert_eq!(params.models, Model::default_models());
        assert_eq!(params.attempt_timeout, Duration::from_secs(15));
        assert_eq!(params.worst_case_latency(), Duration::from_secs(45));
    }

    #[test]
    fn test_builder() {
        let params = ExecutionParams::default()
            .with_models(vec![Model::DeepseekChatV31Free])
            .with_attempt_timeout(Duration::from_millis(500));

        assert_eq!(params.models, vec![Model::DeepseekChatV31Free]);
        assert_eq!(params.attempt_timeout, Duration::from_millis(500));
        assert_eq!(params.worst_case_latency(), Duration::from_millis(500));
    }
}
