//! Structured resolution logging.
//!
//! Provides [`JsonlResolutionLogger`], an append-only JSONL writer that
//! implements the [`ResolutionLogger`](visa_advisor_application::ResolutionLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlResolutionLogger;
