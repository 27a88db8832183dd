//! Storage seam for post records
//!
//! Real deployments back this with a relational store; the in-memory
//! implementation here serves tests and single-process setups.

use crate::error::Result;
use crate::types::{PostRecord, SubjectId};
use parking_lot::RwLock;
use std::collections::HashMap;

/// Store of persisted post records, keyed by subject
pub trait PostStore: Send + Sync {
    /// Insert a record, assigning its id; returns the stored record
    fn insert(&self, record: PostRecord) -> Result<PostRecord>;

    /// All records for one subject, in insertion order
    fn query_by_subject(&self, subject_id: SubjectId) -> Result<Vec<PostRecord>>;

    /// All records grouped by subject
    fn query_all(&self) -> Result<HashMap<SubjectId, Vec<PostRecord>>>;
}

/// In-memory reference implementation of [`PostStore`]
pub struct MemoryStore {
    inner: RwLock<MemoryStoreInner>,
}

struct MemoryStoreInner {
    next_id: i64,
    posts: HashMap<SubjectId, Vec<PostRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(MemoryStoreInner {
                next_id: 1,
                posts: HashMap::new(),
            }),
        }
    }

    /// Total number of stored records
    pub fn len(&self) -> usize {
        self.inner.read().posts.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PostStore for MemoryStore {
    fn insert(&self, mut record: PostRecord) -> Result<PostRecord> {
        let mut inner = self.inner.write();
        record.id = inner.next_id;
        inner.next_id += 1;
        inner
            .posts
            .entry(record.subject_id)
            .or_default()
            .push(record.clone());
        Ok(record)
    }

    fn query_by_subject(&self, subject_id: SubjectId) -> Result<Vec<PostRecord>> {
        Ok(self
            .inner
            .read()
            .posts
            .get(&subject_id)
            .cloned()
            .unwrap_or_default())
    }

    fn query_all(&self) -> Result<HashMap<SubjectId, Vec<PostRecord>>> {
        Ok(self.inner.read().posts.clone())
    }
}
