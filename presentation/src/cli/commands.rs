//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use visa_advisor_domain::{Locale, OutputFormat as DomainOutputFormat};

/// Output format for a resolved answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The answer text only
    Text,
    /// `{"response": "..."}`
    Json,
    /// Answer with question and source details
    Full,
}

impl From<OutputFormat> for DomainOutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => DomainOutputFormat::Text,
            OutputFormat::Json => DomainOutputFormat::Json,
            OutputFormat::Full => DomainOutputFormat::Full,
        }
    }
}

/// Answer language
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LocaleArg {
    /// Simplified Chinese
    Zh,
    /// English
    En,
}

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::Zh => Locale::Zh,
            LocaleArg::En => Locale::En,
        }
    }
}

/// CLI arguments for visa-advisor
#[derive(Parser, Debug)]
#[command(name = "visa-advisor")]
#[command(author, version, about = "UK Global Talent visa Q&A assistant")]
#[command(long_about = r#"
Answers questions about the UK Global Talent visa (Digital Technology route).

Prepared questions get a curated answer immediately. Anything else is sent to
a chain of OpenRouter models, tried in order; if none answers in time, a
built-in overview is returned instead.

Configuration files are loaded from (in priority order):
1. VISA_ADVISOR_* env vars    e.g. VISA_ADVISOR_ANSWERS__LOCALE=en
2. --config <path>            Explicit config file
3. ./visa-advisor.toml        Project-level config
4. ~/.config/visa-advisor/config.toml   Global config

Example:
  visa-advisor "What are the eligibility requirements?"
  visa-advisor --locale en --context-file cv.txt "Am I a good fit?"
  visa-advisor --list-questions
"#)]
pub struct Cli {
    /// The question to ask
    pub question: Option<String>,

    /// Background text (e.g. a CV excerpt) to ground the answer
    #[arg(long, value_name = "TEXT", conflicts_with = "context_file")]
    pub context: Option<String>,

    /// Read background text from a file
    #[arg(long, value_name = "PATH")]
    pub context_file: Option<PathBuf>,

    /// Answer language (overrides config)
    #[arg(short, long, value_enum)]
    pub locale: Option<LocaleArg>,

    /// Models to try in order (can be specified multiple times)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Vec<String>,

    /// Per-model deadline in milliseconds (overrides config)
    #[arg(long, value_name = "MS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_ms: Option<u64>,

    /// Output format (overrides config)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Print the prepared questions for the selected locale and exit
    #[arg(long)]
    pub list_questions: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Also write diagnostics to a daily-rolling file in this directory
    #[arg(long, value_name = "PATH")]
    pub log_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_question_with_options() {
        let cli = Cli::try_parse_from([
            "visa-advisor",
            "Am I eligible?",
            "--locale",
            "en",
            "-m",
            "openai/gpt-oss-20b:free",
            "-m",
            "deepseek/deepseek-chat-v3.1:free",
            "--timeout-ms",
            "5000",
            "-o",
            "json",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.question.as_deref(), Some("Am I eligible?"));
        assert_eq!(cli.locale, Some(LocaleArg::En));
        assert_eq!(cli.model.len(), 2);
        assert_eq!(cli.timeout_ms, Some(5000));
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_defaults_leave_overrides_unset() {
        let cli = Cli::try_parse_from(["visa-advisor"]).unwrap();
        assert!(cli.question.is_none());
        assert!(cli.locale.is_none());
        assert!(cli.output.is_none());
        assert!(cli.model.is_empty());
    }

    #[test]
    fn test_context_sources_conflict() {
        let result = Cli::try_parse_from([
            "visa-advisor",
            "q",
            "--context",
            "inline",
            "--context-file",
            "cv.txt",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let result = Cli::try_parse_from(["visa-advisor", "q", "--timeout-ms", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_conversions_to_domain() {
        assert_eq!(Locale::from(LocaleArg::Zh), Locale::Zh);
        assert_eq!(
            DomainOutputFormat::from(OutputFormat::Full),
            DomainOutputFormat::Full
        );
    }
}
