//! Answer settings from TOML (`[answers]` section)

use serde::{Deserialize, Serialize};
use visa_advisor_domain::{ConfigIssue, ConfigIssueCode, Locale, Severity};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAnswersConfig {
    /// Answer locale: "zh" or "en"
    pub locale: String,
}

impl Default for FileAnswersConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default().to_string(),
        }
    }
}

impl FileAnswersConfig {
    /// Parse the locale, falling back to the default on unknown values.
    pub fn parse_locale(&self) -> (Locale, Vec<ConfigIssue>) {
        match self.locale.parse::<Locale>() {
            Ok(locale) => (locale, Vec::new()),
            Err(_) => (
                Locale::default(),
                vec![ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::InvalidEnumValue {
                        field: "answers.locale".to_string(),
                        value: self.locale.clone(),
                        valid_values: Locale::all().iter().map(|l| l.to_string()).collect(),
                    },
                    message: format!(
                        "answers.locale: unknown value '{}', falling back to '{}'",
                        self.locale,
                        Locale::default()
                    ),
                }],
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_locale() {
        let config = FileAnswersConfig {
            locale: "en".to_string(),
        };
        let (locale, issues) = config.parse_locale();
        assert_eq!(locale, Locale::En);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_unknown_locale_warns() {
        let config = FileAnswersConfig {
            locale: "fr".to_string(),
        };
        let (locale, issues) = config.parse_locale();
        assert_eq!(locale, Locale::Zh);
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error());
    }
}
