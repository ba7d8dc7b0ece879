//! Error types for the OpenRouter adapter

use thiserror::Error;
use visa_advisor_application::GatewayError;

#[derive(Error, Debug)]
pub enum OpenRouterError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("API error: {0}")]
    Api(String),

    #[error("Invalid header value for {0}")]
    InvalidHeader(&'static str),
}

impl From<OpenRouterError> for GatewayError {
    fn from(err: OpenRouterError) -> Self {
        match err {
            OpenRouterError::Http(e) if e.is_timeout() => GatewayError::Timeout,
            OpenRouterError::Http(e) if e.is_connect() => {
                GatewayError::ConnectionError(e.to_string())
            }
            OpenRouterError::Http(e) => GatewayError::RequestFailed(e.to_string()),
            OpenRouterError::Status { status: 429, body } => GatewayError::RateLimited(body),
            OpenRouterError::Status { status: 404, body } => GatewayError::ModelNotAvailable(body),
            OpenRouterError::Status { status, body } => {
                GatewayError::RequestFailed(format!("HTTP {}: {}", status, body))
            }
            OpenRouterError::Api(message) => GatewayError::RequestFailed(message),
            OpenRouterError::InvalidHeader(name) => {
                GatewayError::Other(format!("invalid header value for {}", name))
            }
        }
    }
}
