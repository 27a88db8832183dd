//! Sentiment event bus
//!
//! Classification and post-creation sites publish events here instead of
//! touching metrics inline; a background recorder task subscribes and
//! applies the updates. A lagging or dropped subscriber never affects the
//! publishing path.

use crate::metrics::SentimentMetrics;
use gamepulse_core::{FallbackReason, SentimentLabel, SubjectId};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Events observed by the metrics recorder
#[derive(Debug, Clone, PartialEq)]
pub enum SentimentEvent {
    /// A text was classified for a subject
    Classified {
        subject_id: SubjectId,
        label: SentimentLabel,
        duration_seconds: f64,
        /// Set when the result is the failure fallback, with its reason
        fallback: Option<FallbackReason>,
    },

    /// A post record was persisted
    PostCreated { subject_id: SubjectId },

    /// A subject's mean score changed after a new post was scored
    SubjectScored {
        subject_id: SubjectId,
        mean_score: f64,
    },
}

/// Broadcast bus for sentiment events
pub struct EventBus {
    sender: broadcast::Sender<SentimentEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to events
    pub fn subscribe(&self) -> broadcast::Receiver<SentimentEvent> {
        self.sender.subscribe()
    }

    /// Publish an event to all subscribers
    pub fn publish(&self, event: SentimentEvent) {
        // Ignore send errors (no subscribers)
        let _ = self.sender.send(event);
    }

    /// Get the number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(1024)
    }
}

/// Spawn the background task that turns bus events into metric updates
///
/// The task runs until the bus is dropped. Lagged receivers skip ahead
/// with a warning rather than stalling.
pub fn spawn_metrics_recorder(bus: &EventBus, metrics: SentimentMetrics) -> JoinHandle<()> {
    let mut receiver = bus.subscribe();
    tokio::spawn(async move {
        loop {
            match receiver.recv().await {
                Ok(SentimentEvent::Classified {
                    subject_id,
                    label,
                    duration_seconds,
                    fallback,
                }) => {
                    metrics.record_classification(subject_id, label, duration_seconds);
                    if let Some(reason) = fallback {
                        metrics.record_fallback(subject_id, reason);
                    }
                }
                Ok(SentimentEvent::PostCreated { subject_id }) => {
                    metrics.record_post_created(subject_id);
                }
                Ok(SentimentEvent::SubjectScored {
                    subject_id,
                    mean_score,
                }) => {
                    metrics.update_mean_gauge(subject_id, mean_score);
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!(skipped, "Metrics recorder lagged behind event bus");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    debug!("Event bus closed, metrics recorder exiting");
                    break;
                }
            }
        }
    })
}
