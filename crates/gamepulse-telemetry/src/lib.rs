//! GamePulse Telemetry
//!
//! Observability for the sentiment platform: Prometheus-style metrics on
//! the `metrics` facade and a broadcast event bus that decouples metric
//! updates from the classification request path.
//!
//! Recording is best-effort throughout; nothing here can fail the
//! operation it observes.

pub mod events;
pub mod metrics;

pub use events::{spawn_metrics_recorder, EventBus, SentimentEvent};
pub use metrics::{describe_metrics, install_prometheus_exporter, SentimentMetrics};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::events::{spawn_metrics_recorder, EventBus, SentimentEvent};
    pub use crate::metrics::SentimentMetrics;
}
