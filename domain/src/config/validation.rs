//! Configuration issues reported at startup.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A model name in a list is empty.
    EmptyModelName { field: String },
    /// The fallback chain is empty; every free-form question degrades.
    EmptyModelList { field: String },
    /// A string field holds a value outside its allowed set.
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },
    /// A numeric field is out of range.
    OutOfRange { field: String },
}

/// A detected issue in the loaded configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
