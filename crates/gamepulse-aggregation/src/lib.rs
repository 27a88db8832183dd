//! GamePulse Aggregation
//!
//! Derived per-game sentiment statistics and subject ranking. Aggregates
//! are views recomputed from an immutable snapshot of post records on every
//! query; nothing here is cached or persisted.

pub mod engine;

pub use engine::{aggregate, rank_subjects, GameAggregate, LabelCounts, RankDirection};
