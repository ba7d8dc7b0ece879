//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod answers;
mod logging;
mod models;
mod output;
mod provider;

pub use answers::FileAnswersConfig;
pub use logging::FileLoggingConfig;
pub use models::FileModelsConfig;
pub use output::FileOutputConfig;
pub use provider::FileProviderConfig;

use serde::{Deserialize, Serialize};
use visa_advisor_domain::{ConfigIssue, ConfigIssueCode, Severity};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Model fallback chain
    pub models: FileModelsConfig,
    /// Completion provider (OpenRouter) settings
    pub provider: FileProviderConfig,
    /// Answer locale
    pub answers: FileAnswersConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Resolution log settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks empty model names, unknown enum values and out-of-range numbers.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        issues.extend(self.models.parse_fallback().1);
        issues.extend(self.answers.parse_locale().1);

        if self.provider.attempt_timeout_ms == 0 {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::OutOfRange {
                    field: "provider.attempt_timeout_ms".to_string(),
                },
                message: "provider.attempt_timeout_ms must be greater than 0".to_string(),
            });
        }

        if self.provider.max_tokens == 0 {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::OutOfRange {
                    field: "provider.max_tokens".to_string(),
                },
                message: "provider.max_tokens must be greater than 0".to_string(),
            });
        }

        if !(0.0..=2.0).contains(&self.provider.temperature) {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::OutOfRange {
                    field: "provider.temperature".to_string(),
                },
                message: format!(
                    "provider.temperature: {} is outside 0.0..=2.0",
                    self.provider.temperature
                ),
            });
        }

        issues
    }
}
