//! GamePulse Service
//!
//! Composition root for the sentiment platform: wires the analyzer handle,
//! post store, aggregation engine, and telemetry bus into the operations
//! the outer HTTP/CLI layer calls. No wire format is owned here.

pub mod service;

pub use service::SentimentService;
