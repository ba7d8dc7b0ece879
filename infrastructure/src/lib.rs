//! Infrastructure layer for visa-advisor
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the OpenRouter gateway, configuration
//! file loading, and the JSONL resolution log.

pub mod config;
pub mod logging;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileAnswersConfig, FileConfig, FileLoggingConfig, FileModelsConfig,
    FileOutputConfig, FileProviderConfig,
};
pub use logging::JsonlResolutionLogger;
pub use providers::{OpenRouterGateway, OpenRouterSession, OpenRouterSettings};
