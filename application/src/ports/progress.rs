//! Progress notification port
//!
//! Defines the interface for reporting model attempts while a free-form
//! question is being resolved.

use visa_advisor_domain::{FallbackReason, Model};

/// Callback for progress updates during answer resolution
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain text, nothing).
pub trait AttemptProgressNotifier: Send + Sync {
    /// Called before a model is tried. `index` is zero-based.
    fn on_attempt_start(&self, model: &Model, index: usize, total: usize);

    /// Called when an attempt settles
    fn on_attempt_complete(&self, model: &Model, success: bool);

    /// Called when a degraded-mode answer is substituted
    fn on_fallback(&self, _reason: FallbackReason) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl AttemptProgressNotifier for NoProgress {
    fn on_attempt_start(&self, _model: &Model, _index: usize, _total: usize) {}
    fn on_attempt_complete(&self, _model: &Model, _success: bool) {}
}
