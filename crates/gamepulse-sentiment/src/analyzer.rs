//! Process-wide sentiment analyzer
//!
//! Owns the engine pool for the process lifetime. Constructed explicitly at
//! startup and passed by handle into everything that classifies; a failed
//! construction must abort readiness.

use crate::config::AnalyzerConfig;
use crate::engine::SentimentEngine;
use crate::lexicon::LexiconEngine;
use crate::normalize::normalize_outcome;
use gamepulse_core::{Error, FallbackReason, Result, SentimentOutcome};
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Mutex;
use tracing::{info, warn};

/// Classifier wrapper with truncation and failure-fallback policy
///
/// Engines are not assumed reentrant: each pooled instance sits behind its
/// own mutex and calls are spread round-robin. A pool of size 1 is the
/// strict one-inference-at-a-time discipline.
pub struct SentimentAnalyzer {
    engines: Vec<Mutex<Box<dyn SentimentEngine>>>,
    cursor: AtomicUsize,
    max_input_chars: usize,
}

impl std::fmt::Debug for SentimentAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentimentAnalyzer")
            .field("pool_size", &self.engines.len())
            .field("max_input_chars", &self.max_input_chars)
            .finish_non_exhaustive()
    }
}

impl SentimentAnalyzer {
    /// Build an analyzer over independently constructed engine instances
    pub fn new(engines: Vec<Box<dyn SentimentEngine>>, config: &AnalyzerConfig) -> Result<Self> {
        if engines.is_empty() {
            return Err(Error::model_init("analyzer requires at least one engine"));
        }

        info!(
            pool_size = engines.len(),
            max_input_chars = config.max_input_chars,
            "Sentiment analyzer initialized"
        );

        Ok(Self {
            engines: engines.into_iter().map(Mutex::new).collect(),
            cursor: AtomicUsize::new(0),
            max_input_chars: config.max_input_chars,
        })
    }

    /// Build an analyzer with a single engine and default limits
    pub fn with_engine(engine: Box<dyn SentimentEngine>) -> Result<Self> {
        Self::new(vec![engine], &AnalyzerConfig::default())
    }

    /// Build the default lexicon-backed analyzer from configuration
    ///
    /// Engine construction happens here, eagerly and exactly once; an error
    /// from any instance fails the whole analyzer.
    pub fn from_config(config: &AnalyzerConfig) -> Result<Self> {
        let pool_size = config.pool_size.max(1);
        let mut engines: Vec<Box<dyn SentimentEngine>> = Vec::with_capacity(pool_size);
        for _ in 0..pool_size {
            engines.push(Box::new(LexiconEngine::new()?));
        }
        Self::new(engines, config)
    }

    /// Classify a text into a sentiment outcome
    ///
    /// Never returns an error: engine faults and unrecognized labels become
    /// the neutral fallback outcome. Only the first `max_input_chars`
    /// characters of the input reach the engine.
    pub async fn classify(&self, text: &str) -> SentimentOutcome {
        let truncated = truncate_chars(text, self.max_input_chars);

        let slot = self.cursor.fetch_add(1, Ordering::Relaxed) % self.engines.len();
        let engine = self.engines[slot].lock().await;

        match engine.predict(truncated).await {
            Ok(prediction) => normalize_outcome(&prediction),
            Err(e) => {
                warn!(engine = engine.name(), error = %e, "Sentiment classification failed");
                SentimentOutcome::failed(FallbackReason::EngineError)
            }
        }
    }

    /// Number of pooled engine instances
    pub fn pool_size(&self) -> usize {
        self.engines.len()
    }

    /// Configured input truncation limit, in characters
    pub fn max_input_chars(&self) -> usize {
        self.max_input_chars
    }
}

/// First `max` characters of `text`; no word-boundary awareness
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
