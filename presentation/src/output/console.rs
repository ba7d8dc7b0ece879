//! Console output formatter for resolved answers

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use visa_advisor_domain::{Question, Resolution, ResolutionSource, StaticAnswerStore};

/// Formats resolved answers for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// The answer text only
    pub fn format_text(resolution: &Resolution) -> String {
        resolution.response().to_string()
    }

    /// Format as JSON: exactly one `response` field
    pub fn format_json(resolution: &Resolution) -> String {
        serde_json::json!({ "response": resolution.response() }).to_string()
    }

    /// Format the complete result
    pub fn format_full(question: &Question, resolution: &Resolution) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("UK Global Talent Visa Assistant"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Question:".cyan().bold(),
            question.content()
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Source:".cyan().bold(),
            Self::source_label(resolution.source())
        ));

        output.push_str(&format!("\n{}\n", resolution.response()));
        output.push_str(&Self::footer());

        output
    }

    /// List the prepared questions of a locale, numbered
    pub fn format_guided_questions(store: &StaticAnswerStore) -> String {
        let mut output = format!(
            "{} ({})\n",
            "Prepared questions".cyan().bold(),
            store.locale()
        );
        for (i, question) in store.guided_questions().enumerate() {
            output.push_str(&format!("  {}. {}\n", i + 1, question));
        }
        output
    }

    fn source_label(source: &ResolutionSource) -> String {
        let label = source.to_string();
        if source.is_degraded() {
            label.yellow().to_string()
        } else {
            label.green().to_string()
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        format!("\n{}", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_text(&self, resolution: &Resolution) -> String {
        Self::format_text(resolution)
    }

    fn format_json(&self, resolution: &Resolution) -> String {
        Self::format_json(resolution)
    }

    fn format_full(&self, question: &Question, resolution: &Resolution) -> String {
        Self::format_full(question, resolution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use visa_advisor_domain::{FallbackReason, Locale, Model, OutputFormat};

    fn question() -> Question {
        Question::try_new("How long does it take?").unwrap()
    }

    #[test]
    fn test_json_has_only_response_field() {
        let resolution = Resolution::from_model(Model::GptOss20bFree, "About 8 weeks \"overall\".");
        let json = ConsoleFormatter::format_json(&resolution);

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(object["response"], "About 8 weeks \"overall\".");
    }

    #[test]
    fn test_text_is_response_verbatim() {
        let resolution = Resolution::guided("Prepared answer\nline two");
        assert_eq!(
            ConsoleFormatter.render(OutputFormat::Text, &question(), &resolution),
            "Prepared answer\nline two"
        );
    }

    #[test]
    fn test_full_includes_question_and_source() {
        let resolution = Resolution::fallback(FallbackReason::ChainExhausted, "Overview");
        let output = ConsoleFormatter.render(OutputFormat::Full, &question(), &resolution);

        assert!(output.contains("How long does it take?"));
        assert!(output.contains("fallback (chain_exhausted)"));
        assert!(output.contains("Overview"));
    }

    #[test]
    fn test_guided_questions_are_numbered() {
        let store = StaticAnswerStore::new(Locale::En);
        let output = ConsoleFormatter::format_guided_questions(&store);

        let count = store.guided_questions().count();
        assert!(count > 0);
        assert!(output.contains(&format!("{}. ", count)));
        for q in store.guided_questions() {
            assert!(output.contains(q));
        }
    }
}
