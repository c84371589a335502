//! Local JSON-file record store.
//!
//! The file holds one JSON array of `StoredRecord`s. Every `store` is a full
//! read-modify-write under the sink's lock; a missing file reads as empty.
//! Not safe against other processes writing the same file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;

use super::{RecordId, RecordSink, StoredRecord, SubmissionRecord};
use crate::Result;

pub struct JsonFileSink {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), lock: Mutex::new(()) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<StoredRecord>> {
        match fs::read(&self.path) {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(Vec::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, records: &[StoredRecord]) -> Result<()> {
        let json = serde_json::to_vec_pretty(records)?;
        // Write-then-rename: readers never observe a half-written array.
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

#[async_trait]
impl RecordSink for JsonFileSink {
    async fn store(&self, record: SubmissionRecord) -> Result<StoredRecord> {
        let _guard = self.lock.lock();
        let mut records = self.load()?;
        let next = records.iter().map(|r| r.id.0).max().unwrap_or(0) + 1;
        let stored = StoredRecord { id: RecordId(next), created_at: Utc::now(), record };
        records.push(stored.clone());
        self.save(&records)?;
        Ok(stored)
    }

    async fn records(&self) -> Result<Vec<StoredRecord>> {
        let _guard = self.lock.lock();
        self.load()
    }

    fn name(&self) -> &'static str {
        "json-file"
    }
}
