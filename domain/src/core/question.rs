//! Question value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// A question posed to the advisor (Value Object)
///
/// The content is stored exactly as supplied. Guided questions and the
/// connectivity probe are matched byte-for-byte, so no trimming or
/// normalization happens here. Only the empty string is rejected; a
/// whitespace-only question is a free-form question like any other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Question {
    content: String,
}

impl Question {
    /// Create a question, rejecting empty input.
    pub fn try_new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.is_empty() {
            Err(DomainError::EmptyQuestion)
        } else {
            Ok(Self { content })
        }
    }

    /// Get the question content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl From<Question> for String {
    fn from(q: Question) -> Self {
        q.content
    }
}

impl TryFrom<&str> for Question {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Question::try_new(s)
    }
}

impl TryFrom<String> for Question {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Question::try_new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_creation() {
        let q = Question::try_new("整个过程需要多长时间？").unwrap();
        assert_eq!(q.content(), "整个过程需要多长时间？");
    }

    #[test]
    fn test_empty_question_rejected() {
        assert_eq!(Question::try_new(""), Err(DomainError::EmptyQuestion));
    }

    #[test]
    fn test_whitespace_only_question_accepted() {
        let q = Question::try_new("   \n").unwrap();
        assert_eq!(q.content(), "   \n");
    }

    #[test]
    fn test_deserialize_goes_through_validation() {
        let q: Question = serde_json::from_str("\"整个过程需要多长时间？\"").unwrap();
        assert_eq!(q.content(), "整个过程需要多长时间？");
        assert_eq!(serde_json::to_string(&q).unwrap(), "\"整个过程需要多长时间？\"");

        assert!(serde_json::from_str::<Question>("\"\"").is_err());
    }

    #[test]
    fn test_content_kept_verbatim() {
        let q: Question = " padded ".try_into().unwrap();
        assert_eq!(q.content(), " padded ");
        assert_eq!(q.into_content(), " padded ");
    }
}
