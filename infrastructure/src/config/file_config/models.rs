//! Model fallback chain from TOML (`[models]` section)

use serde::{Deserialize, Serialize};
use visa_advisor_domain::{ConfigIssue, ConfigIssueCode, Model, Severity};

/// Model configuration from TOML
///
/// # Example
///
/// ```toml
/// [models]
/// fallback = [
///     "openai/gpt-oss-20b:free",
///     "google/gemini-2.0-flash-exp:free",
///     "deepseek/deepseek-chat-v3.1:free",
/// ]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    /// Models tried in order for free-form questions
    pub fallback: Vec<String>,
}

impl Default for FileModelsConfig {
    fn default() -> Self {
        Self {
            fallback: Model::default_models()
                .iter()
                .map(|m| m.to_string())
                .collect(),
        }
    }
}

impl FileModelsConfig {
    /// Parse the fallback chain, skipping and reporting empty names.
    pub fn parse_fallback(&self) -> (Vec<Model>, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        let mut models = Vec::new();

        for name in &self.fallback {
            if name.trim().is_empty() {
                issues.push(ConfigIssue {
                    severity: Severity::Error,
                    code: ConfigIssueCode::EmptyModelName {
                        field: "fallback".to_string(),
                    },
                    message: "models.fallback: model name cannot be empty in list".to_string(),
                });
            } else {
                models.push(Model::from_name(name.trim()));
            }
        }

        if models.is_empty() {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::EmptyModelList {
                    field: "fallback".to_string(),
                },
                message: "models.fallback is empty; free-form questions will always get the static fallback answer"
                    .to_string(),
            });
        }

        (models, issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_builtin_chain() {
        let (models, issues) = FileModelsConfig::default().parse_fallback();
        assert_eq!(models, Model::default_models());
        assert!(issues.is_empty());
    }

    #[test]
    fn test_custom_chain_keeps_order() {
        let config = FileModelsConfig {
            fallback: vec![
                "deepseek/deepseek-chat-v3.1:free".to_string(),
                "meta-llama/llama-3.3-70b-instruct".to_string(),
            ],
        };
        let (models, issues) = config.parse_fallback();
        assert_eq!(
            models,
            vec![
                Model::DeepseekChatV31Free,
                Model::Custom("meta-llama/llama-3.3-70b-instruct".to_string()),
            ]
        );
        assert!(issues.is_empty());
    }

    #[test]
    fn test_empty_names_reported() {
        let config = FileModelsConfig {
            fallback: vec!["".to_string(), "  ".to_string()],
        };
        let (models, issues) = config.parse_fallback();
        assert!(models.is_empty());
        assert_eq!(issues.len(), 3);
        assert!(issues[0].is_error());
        assert!(matches!(
            issues[2].code,
            ConfigIssueCode::EmptyModelList { .. }
        ));
    }
}
