//! Built-in lexicon sentiment engine
//!
//! Pattern-matching engine used when no external model is configured.
//! Cheap to construct, so pools of independent instances are practical.

use crate::engine::{RawPrediction, SentimentEngine};
use aho_corasick::AhoCorasick;
use gamepulse_core::Result;

/// Ratio of positive hits above which a text counts as positive; the
/// mirror threshold below counts as negative, and the band between is
/// neutral.
const POSITIVE_THRESHOLD: f64 = 0.6;

pub struct LexiconEngine {
    name: String,
    positive: AhoCorasick,
    negative: AhoCorasick,
}

impl LexiconEngine {
    pub fn new() -> Result<Self> {
        Self::with_name("lexicon")
    }

    pub fn with_name(name: impl Into<String>) -> Result<Self> {
        let positive = vec![
            "good",
            "great",
            "excellent",
            "love",
            "amazing",
            "wonderful",
            "fun",
            "fantastic",
            "awesome",
            "best",
            "masterpiece",
            "addictive",
        ];
        let negative = vec![
            "bad",
            "terrible",
            "awful",
            "hate",
            "horrible",
            "worst",
            "boring",
            "broken",
            "disappointed",
            "poor",
            "buggy",
            "refund",
        ];

        let positive = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(positive)
            .map_err(|e| {
                gamepulse_core::Error::model_init(format!(
                    "Failed to build positive sentiment matcher: {e}"
                ))
            })?;

        let negative = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(negative)
            .map_err(|e| {
                gamepulse_core::Error::model_init(format!(
                    "Failed to build negative sentiment matcher: {e}"
                ))
            })?;

        Ok(Self {
            name: name.into(),
            positive,
            negative,
        })
    }
}

#[async_trait::async_trait]
impl SentimentEngine for LexiconEngine {
    async fn predict(&self, text: &str) -> Result<RawPrediction> {
        let positive_hits = self.positive.find_iter(text).count() as f64;
        let negative_hits = self.negative.find_iter(text).count() as f64;
        let total = positive_hits + negative_hits;

        if total == 0.0 {
            return Ok(RawPrediction::new("neutral", 0.5));
        }

        let ratio = positive_hits / total;
        let prediction = if ratio >= POSITIVE_THRESHOLD {
            RawPrediction::new("positive", ratio)
        } else if ratio <= 1.0 - POSITIVE_THRESHOLD {
            RawPrediction::new("negative", 1.0 - ratio)
        } else {
            RawPrediction::new("neutral", 0.5)
        };

        Ok(prediction)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
