//! OpenRouter provider adapter
//!
//! Talks to an OpenAI-compatible chat completions endpoint
//! (`POST {base_url}/chat/completions`) with a bearer API key.
//! Each session is one system prompt plus one user turn per `send`.

mod error;
mod gateway;
mod session;
mod types;

pub use error::OpenRouterError;
pub use gateway::{OpenRouterGateway, OpenRouterSettings};
pub use session::OpenRouterSession;
