//! Scripted gateway shared by use case tests.

use crate::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use visa_advisor_domain::Model;

/// What a scripted model does when asked
#[derive(Debug, Clone)]
pub(crate) enum Behavior {
    Reply(String),
    Fail,
    FailOnCreate,
    Empty,
    Hang,
}

/// A system prompt / user message pair as seen by the gateway
#[derive(Debug, Clone)]
pub(crate) struct RecordedCall {
    pub model: Model,
    pub system_prompt: String,
    pub user: Option<String>,
}

#[derive(Default)]
pub(crate) struct ScriptedGateway {
    behaviors: HashMap<Model, Behavior>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, model: Model, behavior: Behavior) -> Self {
        self.behaviors.insert(model, behavior);
        self
    }

    /// Models in the order they were attempted
    pub fn attempted(&self) -> Vec<Model> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|c| c.model.clone())
            .collect()
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmGateway for ScriptedGateway {
    async fn create_session_with_system_prompt(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        let index = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(RecordedCall {
                model: model.clone(),
                system_prompt: system_prompt.to_string(),
                user: None,
            });
            calls.len() - 1
        };

        let behavior = self.behaviors.get(model).cloned().unwrap_or(Behavior::Fail);
        if matches!(behavior, Behavior::FailOnCreate) {
            return Err(GatewayError::ModelNotAvailable(model.to_string()));
        }

        Ok(Box::new(ScriptedSession {
            model: model.clone(),
            behavior,
            calls: Arc::clone(&self.calls),
            index,
        }))
    }
}

struct ScriptedSession {
    model: Model,
    behavior: Behavior,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    index: usize,
}

#[async_trait]
impl LlmSession for ScriptedSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, content: &str) -> Result<String, GatewayError> {
        self.calls.lock().unwrap()[self.index].user = Some(content.to_string());

        match &self.behavior {
            Behavior::Reply(text) => Ok(text.clone()),
            Behavior::Empty => Ok(String::new()),
            Behavior::Fail | Behavior::FailOnCreate => {
                Err(GatewayError::RequestFailed("429 Too Many Requests".to_string()))
            }
            Behavior::Hang => {
                std::future::pending::<()>().await;
                Err(GatewayError::Other("unreachable".to_string()))
            }
        }
    }
}
