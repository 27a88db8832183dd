//! The sentiment service

use gamepulse_aggregation::{aggregate, rank_subjects, GameAggregate, RankDirection};
use gamepulse_core::{AuthorId, PostRecord, PostStore, Result, SentimentOutcome, SubjectId};
use gamepulse_sentiment::SentimentAnalyzer;
use gamepulse_telemetry::{spawn_metrics_recorder, EventBus, SentimentEvent, SentimentMetrics};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// Facade over classification, persistence, aggregation, and telemetry
///
/// The analyzer handle is injected: it is constructed once at startup (a
/// failed construction aborts readiness before a service ever exists) and
/// shared by reference. Metric updates ride the event bus and never gate
/// the operations they observe.
pub struct SentimentService {
    analyzer: Arc<SentimentAnalyzer>,
    store: Arc<dyn PostStore>,
    bus: Arc<EventBus>,
}

impl SentimentService {
    /// Create a service and start its metrics recorder task
    pub fn new(analyzer: Arc<SentimentAnalyzer>, store: Arc<dyn PostStore>) -> Self {
        let bus = Arc::new(EventBus::default());
        spawn_metrics_recorder(&bus, SentimentMetrics::new());
        Self {
            analyzer,
            store,
            bus,
        }
    }

    /// The event bus, for additional subscribers
    pub fn bus(&self) -> &Arc<EventBus> {
        &self.bus
    }

    /// Classify a text without persisting anything
    pub async fn classify(&self, text: &str) -> SentimentOutcome {
        self.analyzer.classify(text).await
    }

    /// Classify, persist, and publish events for a new post
    pub async fn submit_post(
        &self,
        subject_id: SubjectId,
        author_id: AuthorId,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<PostRecord> {
        let content = content.into();

        let start = Instant::now();
        let outcome = self.analyzer.classify(&content).await;
        let duration_seconds = start.elapsed().as_secs_f64();

        let result = *outcome.result();
        let record = PostRecord::new(subject_id, author_id, title, content, result);
        let stored = self.store.insert(record)?;

        self.bus.publish(SentimentEvent::Classified {
            subject_id,
            label: result.label,
            duration_seconds,
            fallback: outcome.fallback_reason(),
        });
        self.bus.publish(SentimentEvent::PostCreated { subject_id });

        // Recompute the subject mean with the new post included
        let agg = self.aggregate(subject_id)?;
        if let Some(mean_score) = agg.mean_score {
            self.bus.publish(SentimentEvent::SubjectScored {
                subject_id,
                mean_score,
            });
        }

        info!(
            post_id = stored.id,
            subject_id,
            label = %result.label,
            score = result.score,
            fallback = outcome.is_fallback(),
            "Created post"
        );

        Ok(stored)
    }

    /// Current aggregate view for one subject; mean is None with no posts
    pub fn aggregate(&self, subject_id: SubjectId) -> Result<GameAggregate> {
        let records = self.store.query_by_subject(subject_id)?;
        Ok(aggregate(subject_id, &records))
    }

    /// Ranked subject list; subjects under `min_count` posts are excluded
    pub fn rank_subjects(
        &self,
        direction: RankDirection,
        n: usize,
        min_count: usize,
    ) -> Result<Vec<GameAggregate>> {
        let all = self.store.query_all()?;
        Ok(rank_subjects(&all, direction, n, min_count))
    }
}
