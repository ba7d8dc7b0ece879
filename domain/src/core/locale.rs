//! Answer locale value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// Language of the prepared answers, prompts and probe acknowledgement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Simplified Chinese
    #[default]
    Zh,
    /// English
    En,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Zh => "zh",
            Locale::En => "en",
        }
    }

    pub fn all() -> &'static [Locale] {
        &[Locale::Zh, Locale::En]
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Locale {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "zh" | "zh-cn" | "chinese" => Ok(Locale::Zh),
            "en" | "en-gb" | "english" => Ok(Locale::En),
            other => Err(DomainError::InvalidLocale(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_chinese() {
        assert_eq!(Locale::default(), Locale::Zh);
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("zh-CN".parse::<Locale>().unwrap(), Locale::Zh);
        assert!(matches!(
            "fr".parse::<Locale>(),
            Err(DomainError::InvalidLocale(v)) if v == "fr"
        ));
    }

    #[test]
    fn test_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&Locale::En).unwrap(), "\"en\"");
    }
}
