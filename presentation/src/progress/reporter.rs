//! Progress reporting for model attempts

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;
use visa_advisor_application::AttemptProgressNotifier;
use visa_advisor_domain::{FallbackReason, Model};

/// Spinner on stderr for each model attempt
pub struct ProgressReporter {
    current: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            current: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl AttemptProgressNotifier for ProgressReporter {
    fn on_attempt_start(&self, model: &Model, index: usize, total: usize) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(format!("[{}/{}]", index + 1, total));
        pb.set_message(model.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut current) = self.current.lock()
            && let Some(previous) = current.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    fn on_attempt_complete(&self, model: &Model, success: bool) {
        let Ok(mut current) = self.current.lock() else {
            return;
        };
        if let Some(pb) = current.take() {
            if success {
                pb.finish_with_message(format!("{} {}", "v".green(), model));
            } else {
                pb.finish_with_message(format!("{} {} (failed)", "x".red(), model));
            }
        }
    }

    fn on_fallback(&self, reason: FallbackReason) {
        eprintln!(
            "{} {}",
            "!".yellow().bold(),
            format!("Using built-in answer ({})", reason).yellow()
        );
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl AttemptProgressNotifier for SimpleProgress {
    fn on_attempt_start(&self, model: &Model, index: usize, total: usize) {
        eprintln!("{} [{}/{}] {}", "->".cyan(), index + 1, total, model);
    }

    fn on_attempt_complete(&self, model: &Model, success: bool) {
        if success {
            eprintln!("  {} {}", "v".green(), model);
        } else {
            eprintln!("  {} {} (failed)", "x".red(), model);
        }
    }

    fn on_fallback(&self, reason: FallbackReason) {
        eprintln!("  {} built-in answer ({})", "!".yellow(), reason);
    }
}
