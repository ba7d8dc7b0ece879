//! CLI entrypoint for visa-advisor
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;
use visa_advisor_application::{
    ExecutionParams, LlmGateway, ResolveAnswerInput, ResolveAnswerUseCase,
};
use visa_advisor_domain::{
    ConfigIssue, Locale, Model, OutputFormat, Question, StaticAnswerStore,
};
use visa_advisor_infrastructure::{
    ConfigLoader, FileConfig, JsonlResolutionLogger, OpenRouterGateway,
};
use visa_advisor_presentation::{Cli, ConsoleFormatter, OutputFormatter, ProgressReporter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = init_tracing(cli.verbose, cli.log_dir.as_deref());

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let config = load_config(&cli)?;
    report_config_issues(&config.validate());

    if !config.output.color {
        colored::control::set_override(false);
    }

    let locale = cli
        .locale
        .map(Locale::from)
        .unwrap_or_else(|| config.answers.parse_locale().0);

    if cli.list_questions {
        print!(
            "{}",
            ConsoleFormatter::format_guided_questions(&StaticAnswerStore::new(locale))
        );
        return Ok(());
    }

    let question = Question::try_new(cli.question.clone().unwrap_or_default())?;
    let context = read_context(cli.context.as_deref(), cli.context_file.as_deref())?;

    let params = ExecutionParams::default()
        .with_models(select_models(&cli.model, &config))
        .with_attempt_timeout(
            cli.timeout_ms
                .map(Duration::from_millis)
                .unwrap_or_else(|| config.provider.attempt_timeout()),
        );

    info!(
        locale = %locale,
        models = params.models.len(),
        timeout_ms = params.attempt_timeout.as_millis() as u64,
        "Starting visa-advisor"
    );

    // === Dependency Injection ===
    let gateway: Option<Arc<dyn LlmGateway>> =
        match OpenRouterGateway::from_config(&config.provider, locale)? {
            Some(gateway) => Some(Arc::new(gateway)),
            None => {
                warn!(
                    "No API key found (set ${}); free-form questions get built-in answers",
                    config.provider.api_key_env
                );
                None
            }
        };

    let mut use_case = ResolveAnswerUseCase::new(gateway, locale, params);
    if let Some(path) = &config.logging.resolution_log
        && let Some(logger) = JsonlResolutionLogger::open(path)
    {
        info!("Resolution log: {}", logger.path().display());
        use_case = use_case.with_resolution_logger(Arc::new(logger));
    }

    let format = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();

    let mut input = ResolveAnswerInput::new(question.clone());
    if let Some(context) = context {
        input = input.with_context(context);
    }

    let resolution = if cli.quiet || format == OutputFormat::Json {
        use_case.execute(input).await
    } else {
        let progress = ProgressReporter::new();
        use_case.execute_with_progress(input, &progress).await
    };

    println!("{}", ConsoleFormatter.render(format, &question, &resolution));

    Ok(())
}

/// Install the stderr subscriber, plus a daily-rolling file when requested.
///
/// `RUST_LOG` takes precedence over the `-v` count.
fn init_tracing(verbose: u8, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "visa-advisor.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    if cli.no_config {
        return Ok(ConfigLoader::load_defaults());
    }

    if let Some(path) = &cli.config
        && !path.exists()
    {
        bail!("Config file not found: {}", path.display());
    }

    ConfigLoader::load(cli.config.as_ref())
        .map_err(|e| anyhow!("Failed to load configuration: {}", e))
}

fn report_config_issues(issues: &[ConfigIssue]) {
    for issue in issues {
        if issue.is_error() {
            warn!("config error: {}", issue.message);
        } else {
            warn!("config: {}", issue.message);
        }
    }
}

/// `--model` flags replace the configured chain entirely.
fn select_models(cli_models: &[String], config: &FileConfig) -> Vec<Model> {
    if cli_models.is_empty() {
        return config.models.parse_fallback().0;
    }
    cli_models
        .iter()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .map(Model::from_name)
        .collect()
}

fn read_context(inline: Option<&str>, file: Option<&Path>) -> Result<Option<String>> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .map(Some)
            .with_context(|| format!("Failed to read context file {}", path.display())),
        None => Ok(inline.map(str::to_string)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_models_replace_config_chain() {
        let config = FileConfig::default();
        let models = select_models(&["deepseek/deepseek-chat-v3.1:free".to_string()], &config);
        assert_eq!(models, vec![Model::DeepseekChatV31Free]);
    }

    #[test]
    fn test_no_cli_models_uses_config_chain() {
        let config = FileConfig::default();
        assert_eq!(select_models(&[], &config), Model::default_models());
    }

    #[test]
    fn test_read_inline_context() {
        let context = read_context(Some("ten years of Rust"), None).unwrap();
        assert_eq!(context.as_deref(), Some("ten years of Rust"));
        assert!(read_context(None, None).unwrap().is_none());
    }

    #[test]
    fn test_missing_context_file_is_error() {
        let err = read_context(None, Some(Path::new("/definitely/not/here.txt"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read context file"));
    }

    #[test]
    fn test_empty_question_message() {
        let err = Question::try_new(String::new()).unwrap_err();
        assert_eq!(anyhow::Error::from(err).to_string(), "No message provided");
    }
}
