//! Core types for GamePulse

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of the subject being reviewed (a game)
pub type SubjectId = i64;

/// Identifier of the post author
pub type AuthorId = i64;

/// Canonical sentiment polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Get the canonical uppercase label string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "POSITIVE",
            Self::Negative => "NEGATIVE",
            Self::Neutral => "NEUTRAL",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw label emitted by a sentiment engine, before canonicalization
///
/// The set of recognized values is closed; anything else is carried through
/// as `Unrecognized` so callers must decide how to handle engine drift
/// instead of silently defaulting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawLabel {
    Positive,
    Negative,
    Neutral,
    Unrecognized(String),
}

impl RawLabel {
    /// Parse a raw engine label, case-insensitively
    pub fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "positive" => Self::Positive,
            "negative" => Self::Negative,
            "neutral" => Self::Neutral,
            _ => Self::Unrecognized(raw.to_string()),
        }
    }
}

/// Canonical result of classifying one text
///
/// Invariants: `confidence` is in `[0, 1]`; `score` is `confidence` for
/// positive, `-confidence` for negative, and `0.0` for neutral. Use the
/// constructors to keep them holding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    /// Canonical sentiment polarity
    pub label: SentimentLabel,

    /// Engine confidence in the chosen label (0.0-1.0)
    pub confidence: f64,

    /// Signed canonical score in [-1, 1]
    pub score: f64,
}

impl SentimentResult {
    /// Positive result: score equals confidence
    pub fn positive(confidence: f64) -> Self {
        let confidence = confidence.clamp(0.0, 1.0);
        Self {
            label: SentimentLabel::Positive,
            confidence,
            score: confidence,
        }
    }

    /// Negative result: score is negated confidence
    pub fn negative(confidence: f64) -> Self {
        let confidence = confidence.clamp(0.0, 1.0);
        Self {
            label: SentimentLabel::Negative,
            confidence,
            score: -confidence,
        }
    }

    /// Neutral result: score is zero regardless of confidence
    pub fn neutral(confidence: f64) -> Self {
        Self {
            label: SentimentLabel::Neutral,
            confidence: confidence.clamp(0.0, 1.0),
            score: 0.0,
        }
    }

    /// The fixed fallback substituted when classification fails
    pub fn fallback() -> Self {
        Self::neutral(0.0)
    }
}

/// Why a classification fell back to the neutral result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    /// The engine returned an error mid-call
    EngineError,
    /// The engine returned a label outside the recognized set
    UnrecognizedLabel,
}

impl FallbackReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EngineError => "engine_error",
            Self::UnrecognizedLabel => "unrecognized_label",
        }
    }
}

/// Outcome of a classify call
///
/// Callers always receive a well-formed `SentimentResult` via [`result`],
/// but a genuinely neutral text and a failed classification are distinct
/// variants rather than being conflated.
///
/// [`result`]: SentimentOutcome::result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SentimentOutcome {
    /// The engine ran and its output was normalized successfully
    Scored(SentimentResult),

    /// Classification failed; `result` holds the neutral fallback
    Failed {
        result: SentimentResult,
        reason: FallbackReason,
    },
}

impl SentimentOutcome {
    /// Outcome for a failed classification with the fixed neutral fallback
    pub fn failed(reason: FallbackReason) -> Self {
        Self::Failed {
            result: SentimentResult::fallback(),
            reason,
        }
    }

    /// The sentiment result, fallback or not
    pub fn result(&self) -> &SentimentResult {
        match self {
            Self::Scored(result) => result,
            Self::Failed { result, .. } => result,
        }
    }

    /// Whether this outcome is the failure fallback
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// The fallback reason, if this outcome is the failure fallback
    pub fn fallback_reason(&self) -> Option<FallbackReason> {
        match self {
            Self::Scored(_) => None,
            Self::Failed { reason, .. } => Some(*reason),
        }
    }

    /// Consume the outcome, keeping only the result
    pub fn into_result(self) -> SentimentResult {
        match self {
            Self::Scored(result) => result,
            Self::Failed { result, .. } => result,
        }
    }
}

/// A persisted post with its sentiment attached
///
/// Records accumulate monotonically; sentiment fields never change after
/// creation. `updated_at` is the only updatable field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostRecord {
    /// Storage-assigned identifier (0 until inserted)
    pub id: i64,

    /// The game this post reviews
    pub subject_id: SubjectId,

    /// The post author
    pub author_id: AuthorId,

    /// Post title
    pub title: String,

    /// Free-text body that was classified
    pub content: String,

    /// Sentiment computed at creation time
    pub result: SentimentResult,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last-touched timestamp
    pub updated_at: DateTime<Utc>,
}

impl PostRecord {
    /// Create a new record ready for insertion
    pub fn new(
        subject_id: SubjectId,
        author_id: AuthorId,
        title: impl Into<String>,
        content: impl Into<String>,
        result: SentimentResult,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            subject_id,
            author_id,
            title: title.into(),
            content: content.into(),
            result,
            created_at: now,
            updated_at: now,
        }
    }

    /// Bump the updated timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_sign_invariant() {
        let pos = SentimentResult::positive(0.9);
        assert_eq!(pos.label, SentimentLabel::Positive);
        assert!(pos.score > 0.0);
        assert_eq!(pos.score, pos.confidence);

        let neg = SentimentResult::negative(0.7);
        assert_eq!(neg.label, SentimentLabel::Negative);
        assert!(neg.score < 0.0);
        assert_eq!(neg.score, -neg.confidence);

        let neu = SentimentResult::neutral(0.3);
        assert_eq!(neu.label, SentimentLabel::Neutral);
        assert_eq!(neu.score, 0.0);
        assert_eq!(neu.confidence, 0.3);
    }

    #[test]
    fn test_confidence_clamped() {
        let res = SentimentResult::positive(1.5);
        assert_eq!(res.confidence, 1.0);
        assert_eq!(res.score, 1.0);

        let res = SentimentResult::negative(-0.5);
        assert_eq!(res.confidence, 0.0);
        assert_eq!(res.score, 0.0);
    }

    #[test]
    fn test_raw_label_parse_case_insensitive() {
        assert_eq!(RawLabel::parse("POSITIVE"), RawLabel::Positive);
        assert_eq!(RawLabel::parse("Negative"), RawLabel::Negative);
        assert_eq!(RawLabel::parse("neutral"), RawLabel::Neutral);
        assert_eq!(
            RawLabel::parse("weird"),
            RawLabel::Unrecognized("weird".to_string())
        );
    }

    #[test]
    fn test_fallback_outcome() {
        let outcome = SentimentOutcome::failed(FallbackReason::EngineError);
        assert!(outcome.is_fallback());
        assert_eq!(outcome.fallback_reason(), Some(FallbackReason::EngineError));
        assert_eq!(*outcome.result(), SentimentResult::fallback());
        assert_eq!(outcome.result().label, SentimentLabel::Neutral);
        assert_eq!(outcome.result().confidence, 0.0);
        assert_eq!(outcome.result().score, 0.0);

        let scored = SentimentOutcome::Scored(SentimentResult::positive(0.9));
        assert_eq!(scored.fallback_reason(), None);
    }
}
