//! LLM Gateway port
//!
//! Defines the interface for communicating with the remote completion
//! service.

use async_trait::async_trait;
use thiserror::Error;
use visa_advisor_domain::Model;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for LLM communication
///
/// Built once by the host process and shared read-only across requests.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Create a new session with a system prompt
    async fn create_session_with_system_prompt(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError>;
}

/// An active LLM session
#[async_trait]
pub trait LlmSession: Send + Sync {
    /// Get the model used by this session
    fn model(&self) -> &Model;

    /// Send a message and get the response content.
    ///
    /// The content may be empty if the upstream returned no text.
    async fn send(&self, content: &str) -> Result<String, GatewayError>;
}
