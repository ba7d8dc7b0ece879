//! Model value object representing an upstream completion model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Upstream completion models (Value Object)
///
/// Names follow OpenRouter's `vendor/model[:variant]` convention. Anything
/// not listed here is carried as [`Model::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    GptOss20bFree,
    Gemini20FlashExpFree,
    DeepseekChatV31Free,
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::GptOss20bFree => "openai/gpt-oss-20b:free",
            Model::Gemini20FlashExpFree => "google/gemini-2.0-flash-exp:free",
            Model::DeepseekChatV31Free => "deepseek/deepseek-chat-v3.1:free",
            Model::Custom(s) => s,
        }
    }

    /// Resolve a model name. Unknown names become [`Model::Custom`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "openai/gpt-oss-20b:free" => Model::GptOss20bFree,
            "google/gemini-2.0-flash-exp:free" => Model::Gemini20FlashExpFree,
            "deepseek/deepseek-chat-v3.1:free" => Model::DeepseekChatV31Free,
            other => Model::Custom(other.to_string()),
        }
    }

    /// The default fallback chain, most preferred first.
    pub fn default_models() -> Vec<Model> {
        vec![
            Model::GptOss20bFree,
            Model::Gemini20FlashExpFree,
            Model::DeepseekChatV31Free,
        ]
    }

    /// Whether this is a zero-cost `:free` variant
    pub fn is_free_tier(&self) -> bool {
        self.as_str().ends_with(":free")
    }
}

impl Default for Model {
    /// Returns the most preferred model of the default chain
    fn default() -> Self {
        Model::GptOss20bFree
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Model::from_name(s))
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Model::from_name(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_roundtrip() {
        for model in Model::default_models() {
            let parsed: Model = model.to_string().parse().unwrap();
            assert_eq!(model, parsed);
        }
    }

    #[test]
    fn test_custom_model() {
        let model: Model = "meta-llama/llama-3.3-70b-instruct".parse().unwrap();
        assert_eq!(
            model,
            Model::Custom("meta-llama/llama-3.3-70b-instruct".to_string())
        );
        assert_eq!(model.to_string(), "meta-llama/llama-3.3-70b-instruct");
        assert!(!model.is_free_tier());
    }

    #[test]
    fn test_default_chain_order() {
        let models = Model::default_models();
        assert_eq!(models.len(), 3);
        assert_eq!(models[0], Model::default());
        assert!(models.iter().all(Model::is_free_tier));
    }

    #[test]
    fn test_serde_as_plain_string() {
        let json = serde_json::to_string(&Model::DeepseekChatV31Free).unwrap();
        assert_eq!(json, "\"deepseek/deepseek-chat-v3.1:free\"");
        let model: Model = serde_json::from_str("\"google/gemini-2.0-flash-exp:free\"").unwrap();
        assert_eq!(model, Model::Gemini20FlashExpFree);
    }
}
