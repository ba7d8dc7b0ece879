//! Domain layer for visa-advisor
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Guided question**: one of four anticipated questions with a curated,
//!   deterministic answer ([`StaticAnswerStore::guided_answer`])
//! - **Free-form question**: anything else, answered by an upstream model
//!   using a prompt from [`PromptBuilder`]
//! - **Degraded fallback**: a keyword-selected static answer used when no
//!   model response is obtainable ([`StaticAnswerStore::fallback_answer`])

pub mod answers;
pub mod config;
pub mod core;
pub mod prompt;
pub mod resolution;
pub mod util;

// Re-export commonly used types
pub use answers::{CONNECTIVITY_PROBE, StaticAnswerStore};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::{error::DomainError, locale::Locale, model::Model, question::Question};
pub use prompt::{CONTEXT_EXCERPT_LIMIT, Prompt, PromptBuilder, PromptTemplate};
pub use resolution::{FallbackReason, Resolution, ResolutionSource};
