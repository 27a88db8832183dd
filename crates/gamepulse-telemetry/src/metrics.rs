//! Sentiment metrics on the `metrics` facade
//!
//! Metric names follow the platform's dashboards:
//! - `sentiment_analysis_total{subject, label}` — classifications performed
//! - `sentiment_analysis_duration_seconds` — classification latency
//! - `sentiment_fallback_total{subject, reason}` — fallback classifications
//! - `posts_created_total{subject}` — posts persisted
//! - `game_sentiment_score{subject}` — latest known mean per subject

use gamepulse_core::{FallbackReason, Result, SentimentLabel, SubjectId};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::info;

/// Recorder for classification and aggregation events
///
/// Observes, never influences: every method is infallible from the
/// caller's point of view, and a missing global recorder makes all of
/// them no-ops.
#[derive(Debug, Clone, Copy, Default)]
pub struct SentimentMetrics;

impl SentimentMetrics {
    pub fn new() -> Self {
        Self
    }

    /// Count one classification and record its latency
    pub fn record_classification(
        &self,
        subject_id: SubjectId,
        label: SentimentLabel,
        duration_seconds: f64,
    ) {
        metrics::counter!(
            "sentiment_analysis_total",
            "subject" => subject_id.to_string(),
            "label" => label.as_str()
        )
        .increment(1);
        metrics::histogram!("sentiment_analysis_duration_seconds").record(duration_seconds);
    }

    /// Count one fallback classification, keyed by its reason
    ///
    /// Engine faults and label drift stay distinguishable on dashboards
    /// instead of disappearing into genuine neutrals.
    pub fn record_fallback(&self, subject_id: SubjectId, reason: FallbackReason) {
        metrics::counter!(
            "sentiment_fallback_total",
            "subject" => subject_id.to_string(),
            "reason" => reason.as_str()
        )
        .increment(1);
    }

    /// Count one persisted post
    pub fn record_post_created(&self, subject_id: SubjectId) {
        metrics::counter!(
            "posts_created_total",
            "subject" => subject_id.to_string()
        )
        .increment(1);
    }

    /// Set the latest known mean sentiment for a subject
    pub fn update_mean_gauge(&self, subject_id: SubjectId, mean_score: f64) {
        metrics::gauge!(
            "game_sentiment_score",
            "subject" => subject_id.to_string()
        )
        .set(mean_score);
    }
}

/// Register metric descriptions with the installed recorder
pub fn describe_metrics() {
    metrics::describe_counter!(
        "sentiment_analysis_total",
        "Total number of sentiment analyses performed by subject and label"
    );
    metrics::describe_histogram!(
        "sentiment_analysis_duration_seconds",
        metrics::Unit::Seconds,
        "Sentiment analysis duration in seconds"
    );
    metrics::describe_counter!(
        "sentiment_fallback_total",
        "Total number of fallback classifications by subject and reason"
    );
    metrics::describe_counter!("posts_created_total", "Total number of posts created by subject");
    metrics::describe_gauge!(
        "game_sentiment_score",
        "Current average sentiment score per subject"
    );
}

/// Install the Prometheus recorder and return a handle for rendering
pub fn install_prometheus_exporter() -> Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new().install_recorder().map_err(|e| {
        gamepulse_core::Error::internal(format!("Failed to install metrics recorder: {e}"))
    })?;

    describe_metrics();
    info!("Metrics exporter initialized");

    Ok(handle)
}
