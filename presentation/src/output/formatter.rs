//! Output formatter trait

use visa_advisor_domain::{OutputFormat, Question, Resolution};

/// Trait for formatting resolved answers
pub trait OutputFormatter {
    /// The answer text only
    fn format_text(&self, resolution: &Resolution) -> String;

    /// Format as `{"response": "..."}`
    fn format_json(&self, resolution: &Resolution) -> String;

    /// Question, answer and the path that produced it
    fn format_full(&self, question: &Question, resolution: &Resolution) -> String;

    /// Dispatch on the selected output format
    fn render(&self, format: OutputFormat, question: &Question, resolution: &Resolution) -> String {
        match format {
            OutputFormat::Text => self.format_text(resolution),
            OutputFormat::Json => self.format_json(resolution),
            OutputFormat::Full => self.format_full(question, resolution),
        }
    }
}
