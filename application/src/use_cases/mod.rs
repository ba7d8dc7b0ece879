//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod model_fallback;
pub mod resolve_answer;

#[cfg(test)]
pub(crate) mod test_support;
