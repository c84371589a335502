//! Primary-then-fallback record sink.

use async_trait::async_trait;
use tracing::warn;

use super::{RecordSink, StoredRecord, SubmissionRecord};
use crate::{Error, Result};

/// Stores through `primary`; when that fails, stores through `fallback`.
///
/// Reads come from the fallback, the store this process can always see.
pub struct FallbackSink<P, F> {
    primary: P,
    fallback: F,
}

impl<P: RecordSink, F: RecordSink> FallbackSink<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }

    pub fn primary(&self) -> &P {
        &self.primary
    }

    pub fn fallback(&self) -> &F {
        &self.fallback
    }
}

#[async_trait]
impl<P: RecordSink, F: RecordSink> RecordSink for FallbackSink<P, F> {
    async fn store(&self, record: SubmissionRecord) -> Result<StoredRecord> {
        let primary_err = match self.primary.store(record.clone()).await {
            Ok(stored) => return Ok(stored),
            Err(e) => e,
        };
        warn!(
            target: "sanskar::submission",
            primary = self.primary.name(),
            fallback = self.fallback.name(),
            error = %primary_err,
            "Primary sink failed, storing locally"
        );
        self.fallback.store(record).await.map_err(|fallback_err| {
            Error::Submission(format!(
                "{} failed ({primary_err}); {} failed ({fallback_err})",
                self.primary.name(),
                self.fallback.name(),
            ))
        })
    }

    async fn records(&self) -> Result<Vec<StoredRecord>> {
        self.fallback.records().await
    }

    fn name(&self) -> &'static str {
        "fallback"
    }
}
