//! Prompt domain
//!
//! Builds the system instruction sent to upstream models for free-form
//! questions, optionally enriched with an excerpt of the user's résumé.

mod builder;
mod template;

pub use builder::{CONTEXT_EXCERPT_LIMIT, Prompt, PromptBuilder};
pub use template::PromptTemplate;
