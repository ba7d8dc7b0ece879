//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("No message provided")]
    EmptyQuestion,

    #[error("Unknown locale: {0} (expected 'zh' or 'en')")]
    InvalidLocale(String),

    #[error("Invalid model: {0}")]
    InvalidModel(String),
}

impl DomainError {
    /// Whether this error should be reported to the caller as bad input.
    ///
    /// Only an empty question crosses the resolution boundary as an error;
    /// everything else is a configuration problem caught at startup.
    pub fn is_client_input(&self) -> bool {
        matches!(self, DomainError::EmptyQuestion)
    }
}
