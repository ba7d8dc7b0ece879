//! Resolve Answer use case.
//!
//! Answers one question. Classification order, first match wins:
//!
//! 1. Connectivity probe → fixed acknowledgement
//! 2. Guided question → prepared answer, no model involved
//! 3. Free-form → prompt + model fallback chain, degrading to a
//!    keyword-selected static answer when no model answers
//!
//! This use case never fails: every upstream problem is absorbed and turned
//! into a degraded answer. Empty questions are rejected earlier, when the
//! [`Question`] is constructed.

use crate::config::ExecutionParams;
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::{AttemptProgressNotifier, NoProgress};
use crate::ports::resolution_logger::{NoResolutionLogger, ResolutionEvent, ResolutionLogger};
use crate::use_cases::model_fallback::{FallbackError, ModelFallbackExecutor};
use std::sync::Arc;
use tracing::{debug, info, trace, warn};
use visa_advisor_domain::util::truncate_str;
use visa_advisor_domain::{
    FallbackReason, Locale, PromptBuilder, Question, Resolution, ResolutionSource,
    StaticAnswerStore,
};

/// Input for the [`ResolveAnswerUseCase`].
#[derive(Debug, Clone)]
pub struct ResolveAnswerInput {
    /// The user's question.
    pub question: Question,
    /// Optional background material, e.g. the text of a résumé.
    pub context: Option<String>,
}

impl ResolveAnswerInput {
    pub fn new(question: Question) -> Self {
        Self {
            question,
            context: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

/// Use case for answering a single question.
pub struct ResolveAnswerUseCase {
    executor: Option<ModelFallbackExecutor>,
    store: StaticAnswerStore,
    prompt_builder: PromptBuilder,
    params: ExecutionParams,
    resolution_logger: Arc<dyn ResolutionLogger>,
}

impl Clone for ResolveAnswerUseCase {
    fn clone(&self) -> Self {
        Self {
            executor: self.executor.clone(),
            store: self.store,
            prompt_builder: self.prompt_builder,
            params: self.params.clone(),
            resolution_logger: self.resolution_logger.clone(),
        }
    }
}

impl ResolveAnswerUseCase {
    /// Create the use case.
    ///
    /// `gateway` is `None` when no completion capability is configured
    /// (e.g. missing API key); free-form questions then go straight to the
    /// degraded fallback.
    pub fn new(
        gateway: Option<Arc<dyn LlmGateway>>,
        locale: Locale,
        params: ExecutionParams,
    ) -> Self {
        let executor = gateway.map(|g| ModelFallbackExecutor::from_params(g, &params));
        Self {
            executor,
            store: StaticAnswerStore::new(locale),
            prompt_builder: PromptBuilder::new(locale),
            params,
            resolution_logger: Arc::new(NoResolutionLogger),
        }
    }

    /// Create with a resolution logger.
    pub fn with_resolution_logger(mut self, logger: Arc<dyn ResolutionLogger>) -> Self {
        self.resolution_logger = logger;
        self
    }

    pub fn has_capability(&self) -> bool {
        self.executor.is_some()
    }

    pub fn store(&self) -> &StaticAnswerStore {
        &self.store
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: ResolveAnswerInput) -> Resolution {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: ResolveAnswerInput,
        progress: &dyn AttemptProgressNotifier,
    ) -> Resolution {
        let resolution = self.classify_and_resolve(&input, progress).await;
        self.log_resolution(&input, &resolution);
        resolution
    }

    async fn classify_and_resolve(
        &self,
        input: &ResolveAnswerInput,
        progress: &dyn AttemptProgressNotifier,
    ) -> Resolution {
        let question = input.question.content();

        if StaticAnswerStore::is_probe(question) {
            debug!("Connectivity probe");
            return Resolution::probe(self.store.probe_acknowledgement());
        }

        if let Some(answer) = self.store.guided_answer(question) {
            debug!("Guided question matched");
            return Resolution::guided(answer);
        }

        let Some(executor) = &self.executor else {
            info!("No completion capability configured; using fallback answer");
            return self.fallback(question, FallbackReason::NoCapability, progress);
        };

        debug!(
            question = truncate_str(question, 100),
            has_context = input.context.is_some(),
            context_len = input.context.as_ref().map_or(0, |c| c.chars().count()),
            "Resolving free-form question"
        );

        let context = input.context.as_deref();
        if let Some(context) = context {
            trace!("Context excerpt sent to model: {}", PromptBuilder::excerpt(context));
        }
        let prompt = self.prompt_builder.build(&input.question, context);

        match executor
            .execute_with_progress(&prompt, &self.params.models, progress)
            .await
        {
            Ok(success) => Resolution::from_model(success.model, success.content),
            Err(FallbackError::NoModels) => {
                warn!("Model list is empty; using fallback answer");
                self.fallback(question, FallbackReason::NoModels, progress)
            }
            Err(e @ FallbackError::Exhausted { .. }) => {
                warn!("{}; using fallback answer", e);
                self.fallback(question, FallbackReason::ChainExhausted, progress)
            }
        }
    }

    fn fallback(
        &self,
        question: &str,
        reason: FallbackReason,
        progress: &dyn AttemptProgressNotifier,
    ) -> Resolution {
        progress.on_fallback(reason);
        Resolution::fallback(reason, self.store.fallback_answer(question))
    }

    fn log_resolution(&self, input: &ResolveAnswerInput, resolution: &Resolution) {
        let model = match resolution.source() {
            ResolutionSource::Model { model } => Some(model.to_string()),
            _ => None,
        };
        let reason = match resolution.source() {
            ResolutionSource::Fallback { reason } => Some(reason.as_str()),
            _ => None,
        };

        self.resolution_logger.log(ResolutionEvent::new(
            "resolution",
            serde_json::json!({
                "locale": self.store.locale().as_str(),
                "question": truncate_str(input.question.content(), 200),
                "context_chars": input.context.as_ref().map(|c| c.chars().count()),
                "source": resolution.source(),
                "model": model,
                "fallback_reason": reason,
                "response_bytes": resolution.response().len(),
            }),
        ));
    }
}
