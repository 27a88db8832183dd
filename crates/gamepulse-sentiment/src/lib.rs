//! GamePulse Sentiment
//!
//! Classification of free-text posts into a canonical signed sentiment score.
//!
//! The pieces, from the outside in:
//! - [`SentimentAnalyzer`] — the process-wide classifier handle: input
//!   truncation, engine pooling, and the failure-fallback policy
//! - [`SentimentEngine`] — the opaque `predict(text) -> (label, confidence)`
//!   oracle seam; any pretrained model plugs in here
//! - [`LexiconEngine`] — the built-in pattern-matching engine
//! - [`normalize`] — pure mapping from raw engine output to a
//!   `SentimentResult`
//!
//! Callers of [`SentimentAnalyzer::classify`] never observe an error for a
//! per-call engine fault; they always receive a well-formed outcome,
//! possibly the neutral fallback.

pub mod analyzer;
pub mod config;
pub mod engine;
pub mod lexicon;
pub mod normalize;

pub use analyzer::SentimentAnalyzer;
pub use config::{load_config, AnalyzerConfig};
pub use engine::{RawPrediction, SentimentEngine};
pub use lexicon::LexiconEngine;
pub use normalize::{normalize, normalize_outcome};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::analyzer::SentimentAnalyzer;
    pub use crate::config::AnalyzerConfig;
    pub use crate::engine::{RawPrediction, SentimentEngine};
    pub use crate::lexicon::LexiconEngine;
    pub use crate::normalize::{normalize, normalize_outcome};
}
