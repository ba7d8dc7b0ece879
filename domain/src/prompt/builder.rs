//! System instruction construction

use super::template::PromptTemplate;
use crate::core::locale::Locale;
use crate::core::question::Question;
use crate::util::take_chars;
use serde::{Deserialize, Serialize};

/// Maximum number of context characters embedded in a prompt
pub const CONTEXT_EXCERPT_LIMIT: usize = 1500;

/// A completed prompt: system instruction plus the user's message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    pub instruction: String,
    pub user: String,
}

/// Builds prompts for free-form questions.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptBuilder {
    locale: Locale,
}

impl PromptBuilder {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Build the prompt for `question`.
    ///
    /// An empty context counts as absent. Otherwise its first [`CONTEXT_EXCERPT_LIMIT`]
    /// characters are embedded verbatim. The cut is hard: no word-boundary
    /// adjustment and no sanitizing of the content.
    pub fn build(&self, question: &Question, context: Option<&str>) -> Prompt {
        let mut instruction = PromptTemplate::role_statement(self.locale).to_string();

        if let Some(context) = context.filter(|c| !c.is_empty()) {
            let excerpt = Self::excerpt(context);
            instruction.push_str(&PromptTemplate::context_section(self.locale, excerpt));
        }

        Prompt {
            instruction,
            user: question.content().to_string(),
        }
    }

    /// The part of `context` that makes it into the prompt
    pub fn excerpt(context: &str) -> &str {
        take_chars(context, CONTEXT_EXCERPT_LIMIT)
    }
}
