//! # Submission Records
//!
//! After a schedule is computed, a record of the submission goes to a
//! spreadsheet webhook, with a local store as fallback. This module owns the
//! record shape and the `RecordSink` contract; transports live outside it.
//!
//! ## Implementations
//!
//! | Sink | Module | Description |
//! |------|--------|-------------|
//! | `MemorySink` | `memory` | In-memory, for tests and embedding |
//! | `JsonFileSink` | `file` | Local JSON array file |
//! | `FallbackSink` | `fallback` | Primary sink, then a fallback sink |

pub mod fallback;
pub mod file;
pub mod memory;

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::model::{Gender, PersonProfile, SanskarResult};
use crate::{Error, Result};

pub use fallback::FallbackSink;
pub use file::JsonFileSink;
pub use memory::MemorySink;

/// `dob` column format.
pub const DOB_FORMAT: &str = "%Y-%m-%d";
/// `timestamp` column format.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Indian Standard Time, UTC+05:30.
const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

// ============================================================================
// Configuration
// ============================================================================

/// Settings for building submission records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionConfig {
    /// Zone the `timestamp` column is reported in.
    pub report_offset: FixedOffset,
}

impl SubmissionConfig {
    pub fn with_offset(report_offset: FixedOffset) -> Self {
        Self { report_offset }
    }
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        // east_opt only fails outside ±24h.
        let ist = FixedOffset::east_opt(IST_OFFSET_SECS).unwrap_or_else(|| Utc.fix());
        Self { report_offset: ist }
    }
}

// ============================================================================
// Records
// ============================================================================

/// One row for the spreadsheet: who submitted, and the first ceremony date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub gender: Gender,
    pub dob: String,
    pub first_sanskar_date: String,
    pub timestamp: String,
}

impl SubmissionRecord {
    /// Build the record for a computed schedule.
    ///
    /// Only `schedule[0]` is read; an empty schedule is an error.
    pub fn new(
        profile: &PersonProfile,
        schedule: &[SanskarResult],
        submitted_at: DateTime<Utc>,
        config: &SubmissionConfig,
    ) -> Result<Self> {
        let first = schedule.first().ok_or(Error::EmptySchedule)?;
        let local = submitted_at.with_timezone(&config.report_offset);
        Ok(Self {
            name: profile.name.clone(),
            email: profile.email.clone(),
            phone: profile.phone.clone(),
            gender: profile.gender,
            dob: profile.date_of_birth.format(DOB_FORMAT).to_string(),
            first_sanskar_date: first.computed_date.clone(),
            timestamp: local.format(TIMESTAMP_FORMAT).to_string(),
        })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Opaque record identifier assigned by a sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordId(pub u64);

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A record as kept by a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredRecord {
    pub id: RecordId,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub record: SubmissionRecord,
}

// ============================================================================
// RecordSink trait
// ============================================================================

/// Contract between the calculator front end and whatever keeps records.
#[async_trait]
pub trait RecordSink: Send + Sync {
    /// Store one record, returning it with its assigned id.
    async fn store(&self, record: SubmissionRecord) -> Result<StoredRecord>;

    /// All records, oldest first.
    async fn records(&self) -> Result<Vec<StoredRecord>>;

    async fn get(&self, id: RecordId) -> Result<Option<StoredRecord>> {
        Ok(self.records().await?.into_iter().find(|r| r.id == id))
    }

    /// Short name used in log lines.
    fn name(&self) -> &'static str;
}

/// Build a record for `schedule`, stamped now, and store it in `sink`.
pub async fn submit<S: RecordSink + ?Sized>(
    profile: &PersonProfile,
    schedule: &[SanskarResult],
    sink: &S,
    config: &SubmissionConfig,
) -> Result<StoredRecord> {
    let record = SubmissionRecord::new(profile, schedule, Utc::now(), config)?;
    let stored = sink.store(record).await?;
    info!(
        target: "sanskar::submission",
        sink = sink.name(),
        id = %stored.id,
        "Submission stored"
    );
    Ok(stored)
}
