//! Completion provider adapters implementing the `LlmGateway` port.

pub mod openrouter;

pub use openrouter::{OpenRouterGateway, OpenRouterSession, OpenRouterSettings};
