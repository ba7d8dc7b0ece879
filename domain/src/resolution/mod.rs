//! Resolution result
//!
//! The outcome of answering one question. Only [`Resolution::response`]
//! crosses the service boundary; the source is kept for logs and diagnostics.

use crate::core::model::Model;
use serde::{Deserialize, Serialize};

/// Why a degraded-mode answer was used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    /// No completion capability was configured
    NoCapability,
    /// The model list was empty
    NoModels,
    /// Every model failed, timed out, or returned empty content
    ChainExhausted,
}

impl FallbackReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            FallbackReason::NoCapability => "no_capability",
            FallbackReason::NoModels => "no_models",
            FallbackReason::ChainExhausted => "chain_exhausted",
        }
    }
}

impl std::fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which path produced the response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResolutionSource {
    Probe,
    Guided,
    Model { model: Model },
    Fallback { reason: FallbackReason },
}

impl ResolutionSource {
    pub fn is_degraded(&self) -> bool {
        matches!(self, ResolutionSource::Fallback { .. })
    }
}

impl std::fmt::Display for ResolutionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolutionSource::Probe => write!(f, "probe"),
            ResolutionSource::Guided => write!(f, "guided"),
            ResolutionSource::Model { model } => write!(f, "model ({})", model),
            ResolutionSource::Fallback { reason } => write!(f, "fallback ({})", reason),
        }
    }
}

/// A resolved answer. The response is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    response: String,
    source: ResolutionSource,
}

impl Resolution {
    pub fn probe(response: impl Into<String>) -> Self {
        Self::new(response, ResolutionSource::Probe)
    }

    pub fn guided(response: impl Into<String>) -> Self {
        Self::new(response, ResolutionSource::Guided)
    }

    pub fn from_model(model: Model, response: impl Into<String>) -> Self {
        Self::new(response, ResolutionSource::Model { model })
    }

    pub fn fallback(reason: FallbackReason, response: impl Into<String>) -> Self {
        Self::new(response, ResolutionSource::Fallback { reason })
    }

    fn new(response: impl Into<String>, source: ResolutionSource) -> Self {
        Self {
            response: response.into(),
            source,
        }
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    pub fn source(&self) -> &ResolutionSource {
        &self.source
    }

    pub fn into_response(self) -> String {
        self.response
    }
}
