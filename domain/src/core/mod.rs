//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: upstream completion models in fallback order
//! - [`question::Question`]: a validated, non-empty question
//! - [`locale::Locale`]: language of prepared answers and prompts
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod locale;
pub mod model;
pub mod question;
