//! Application-level configuration.
//!
//! - [`ExecutionParams`]: model fallback chain and per-attempt deadline

pub mod execution_params;

pub use execution_params::ExecutionParams;
