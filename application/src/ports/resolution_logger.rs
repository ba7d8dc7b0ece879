//! Port for structured resolution logging.
//!
//! Defines the [`ResolutionLogger`] trait for recording one event per
//! answered question (path taken, model used, sizes) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures a
//! machine-readable record (JSONL) for later analysis.

use serde_json::Value;

/// A structured resolution event for logging.
pub struct ResolutionEvent {
    /// Event type identifier (e.g., "resolution").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ResolutionEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging resolution events to a structured log.
///
/// `log` is synchronous and non-fallible; write failures are ignored so
/// that logging never changes the answer a caller receives.
pub trait ResolutionLogger: Send + Sync {
    /// Record a resolution event.
    fn log(&self, event: ResolutionEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoResolutionLogger;

impl ResolutionLogger for NoResolutionLogger {
    fn log(&self, _event: ResolutionEvent) {}
}
