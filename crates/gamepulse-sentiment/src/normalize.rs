//! Canonicalization of raw engine output
//!
//! Pure functions; all logging and fallback policy decisions stay with the
//! caller except for the single drift warning in [`normalize_outcome`].

use crate::engine::RawPrediction;
use gamepulse_core::{FallbackReason, RawLabel, SentimentOutcome, SentimentResult};
use tracing::warn;

/// Map a recognized raw label and confidence to a canonical result
///
/// Returns `None` for [`RawLabel::Unrecognized`]; the caller decides how to
/// handle engine drift.
pub fn normalize(label: &RawLabel, raw_confidence: f64) -> Option<SentimentResult> {
    match label {
        RawLabel::Positive => Some(SentimentResult::positive(raw_confidence)),
        RawLabel::Negative => Some(SentimentResult::negative(raw_confidence)),
        RawLabel::Neutral => Some(SentimentResult::neutral(raw_confidence)),
        RawLabel::Unrecognized(_) => None,
    }
}

/// Normalize a raw prediction into a classify outcome
///
/// Unrecognized labels produce the neutral zero-confidence fallback with a
/// warning, tagged `UnrecognizedLabel` so drift stays observable.
pub fn normalize_outcome(prediction: &RawPrediction) -> SentimentOutcome {
    let label = RawLabel::parse(&prediction.label);
    match normalize(&label, prediction.confidence) {
        Some(result) => SentimentOutcome::Scored(result),
        None => {
            warn!(raw_label = %prediction.label, "Unexpected sentiment label from engine");
            SentimentOutcome::failed(FallbackReason::UnrecognizedLabel)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamepulse_core::SentimentLabel;

    #[test]
    fn test_normalize_positive() {
        let result = normalize(&RawLabel::parse("POSITIVE"), 0.9).unwrap();
        assert_eq!(result.label, SentimentLabel::Positive);
        assert_eq!(result.confidence, 0.9);
        assert_eq!(result.score, 0.9);
    }

    #[test]
    fn test_normalize_negative() {
        let result = normalize(&RawLabel::parse("negative"), 0.7).unwrap();
        assert_eq!(result.label, SentimentLabel::Negative);
        assert_eq!(result.confidence, 0.7);
        assert_eq!(result.score, -0.7);
    }

    #[test]
    fn test_normalize_neutral() {
        let result = normalize(&RawLabel::parse("neutral"), 0.3).unwrap();
        assert_eq!(result.label, SentimentLabel::Neutral);
        assert_eq!(result.confidence, 0.3);
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_normalize_unrecognized() {
        assert!(normalize(&RawLabel::parse("weird"), 0.5).is_none());
    }

    #[test]
    fn test_outcome_unrecognized_falls_back() {
        let outcome = normalize_outcome(&RawPrediction::new("weird", 0.5));
        assert!(outcome.is_fallback());
        let result = outcome.result();
        assert_eq!(result.label, SentimentLabel::Neutral);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.score, 0.0);
        match outcome {
            SentimentOutcome::Failed { reason, .. } => {
                assert_eq!(reason, FallbackReason::UnrecognizedLabel)
            }
            _ => panic!("expected fallback"),
        }
    }

    #[test]
    fn test_outcome_scored_passthrough() {
        let outcome = normalize_outcome(&RawPrediction::new("Positive", 0.8));
        assert!(!outcome.is_fallback());
        assert_eq!(outcome.result().score, 0.8);
    }
}
