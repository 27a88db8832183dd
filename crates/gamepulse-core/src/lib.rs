//! GamePulse Core
//!
//! Core types, traits, and utilities shared across GamePulse components.
//!
//! This crate provides:
//! - Canonical sentiment types (labels, results, classification outcomes)
//! - Post records as stored and aggregated by the rest of the platform
//! - Error types and result handling
//! - The storage seam (`PostStore`) with an in-memory reference implementation

pub mod error;
pub mod store;
pub mod types;

pub use error::{Error, Result};
pub use store::{MemoryStore, PostStore};
pub use types::{
    AuthorId, FallbackReason, PostRecord, RawLabel, SentimentLabel, SentimentOutcome,
    SentimentResult, SubjectId,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::store::{MemoryStore, PostStore};
    pub use crate::types::{
        FallbackReason, PostRecord, RawLabel, SentimentLabel, SentimentOutcome, SentimentResult,
        SubjectId,
    };
}
