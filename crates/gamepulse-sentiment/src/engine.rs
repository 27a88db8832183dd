//! Sentiment engine trait and raw prediction type

use async_trait::async_trait;
use gamepulse_core::Result;

/// Raw output of a sentiment engine, before canonicalization
#[derive(Debug, Clone, PartialEq)]
pub struct RawPrediction {
    /// Raw label string as emitted by the engine
    pub label: String,

    /// Engine confidence (0.0-1.0)
    pub confidence: f64,
}

impl RawPrediction {
    /// Create a new raw prediction
    pub fn new(label: impl Into<String>, confidence: f64) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }
}

/// The opaque classification oracle
///
/// An engine instance is not assumed safe for concurrent invocation; the
/// analyzer serializes calls to each instance. Construction may be
/// expensive (model load) and happens once per instance.
#[async_trait]
pub trait SentimentEngine: Send + Sync {
    /// Predict sentiment for the given (already truncated) text
    async fn predict(&self, text: &str) -> Result<RawPrediction>;

    /// Get the engine name
    fn name(&self) -> &str;
}
