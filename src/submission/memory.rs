//! In-memory record sink.
//!
//! Records live in a `Vec` behind a `RwLock`; ids come from an atomic
//! counter starting at 1. Nothing survives the process.
//!
//! Use this sink for:
//! - Tests of the submission flow
//! - Embedding the calculator where records are forwarded elsewhere
//! - Simulating an unreachable webhook via `MemorySink::failing()`

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;

use super::{RecordId, RecordSink, StoredRecord, SubmissionRecord};
use crate::{Error, Result};

/// In-memory record store. Clones share the same records.
#[derive(Clone)]
pub struct MemorySink {
    inner: Arc<MemoryInner>,
}

struct MemoryInner {
    records: RwLock<Vec<StoredRecord>>,
    next_id: AtomicU64,
    reject_writes: bool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::build(false)
    }

    /// A sink whose every `store` fails, standing in for an unreachable service.
    pub fn failing() -> Self {
        Self::build(true)
    }

    fn build(reject_writes: bool) -> Self {
        Self {
            inner: Arc::new(MemoryInner {
                records: RwLock::new(Vec::new()),
                next_id: AtomicU64::new(1),
                reject_writes,
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.records.read().is_empty()
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordSink for MemorySink {
    async fn store(&self, record: SubmissionRecord) -> Result<StoredRecord> {
        if self.inner.reject_writes {
            return Err(Error::Submission("memory sink rejects writes".into()));
        }
        let stored = StoredRecord {
            id: RecordId(self.inner.next_id.fetch_add(1, Ordering::Relaxed)),
            created_at: Utc::now(),
            record,
        };
        self.inner.records.write().push(stored.clone());
        Ok(stored)
    }

    async fn records(&self) -> Result<Vec<StoredRecord>> {
        Ok(self.inner.records.read().clone())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
