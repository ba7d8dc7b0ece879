//! Application layer for visa-advisor
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ExecutionParams;
pub use ports::{
    llm_gateway::{GatewayError, LlmGateway, LlmSession},
    progress::{AttemptProgressNotifier, NoProgress},
    resolution_logger::{NoResolutionLogger, ResolutionEvent, ResolutionLogger},
};
pub use use_cases::model_fallback::{
    AttemptError, FallbackError, FallbackSuccess, ModelFallbackExecutor,
};
pub use use_cases::resolve_answer::{ResolveAnswerInput, ResolveAnswerUseCase};
