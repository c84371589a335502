//! # sanskar-rs — Sixteen-Sanskar Schedule Calculator
//!
//! Computes the dates of the sixteen traditional life-cycle ceremonies from a
//! birth date and gender, using fixed Gregorian offsets.
//!
//! ## Design Principles
//!
//! 1. **Table-first**: every ceremony is one `SanskarDefinition` row with a tagged `OffsetRule`
//! 2. **Pure core**: `compute_schedule` does no I/O and holds no state
//! 3. **Display-ready output**: results carry formatted strings, never raw dates
//! 4. **Sinks at the edge**: records leave through the `RecordSink` trait
//!
//! ## Quick Start
//!
//! ```rust
//! use sanskar_rs::{compute_schedule, PersonProfile, ProfileInput};
//!
//! # fn example() -> sanskar_rs::Result<()> {
//! let input = ProfileInput {
//!     name: "Ada".into(),
//!     email: "ada@example.com".into(),
//!     gender: Some("male".into()),
//!     dob: Some("2000-01-15".into()),
//!     ..Default::default()
//! };
//! let profile = PersonProfile::try_from(input)?;
//!
//! let schedule = compute_schedule(&profile)?;
//! assert_eq!(schedule.len(), 16);
//! assert_eq!(schedule[13].computed_date, "January 15, 2025");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Offset Rules
//!
//! | Rule | Date | Age label |
//! |------|------|-----------|
//! | `NoDate` | fixed placeholder | fixed label |
//! | `FixedOffset` | dob ± n days/months/years | "During pregnancy" / "At birth" / "n units" |
//! | `GenderConditionalYears` | dob + years by gender | "n years" |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod schedule;
pub mod export;
pub mod submission;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{
    Gender, PersonProfile, ProfileInput,
    OffsetRule, OffsetUnit, SanskarDefinition, SanskarResult,
};

// ============================================================================
// Re-exports: Calculator
// ============================================================================

pub use schedule::{compute_schedule, SANSKARS, SANSKAR_COUNT};

// ============================================================================
// Re-exports: Export and Submission
// ============================================================================

pub use export::export_schedule;
pub use submission::{
    submit, RecordSink, RecordId, StoredRecord, SubmissionConfig, SubmissionRecord,
    MemorySink, JsonFileSink, FallbackSink,
};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    #[error("Date out of range for {ceremony}: {message}")]
    DateOutOfRange { ceremony: String, message: String },

    #[error("Schedule is empty")]
    EmptySchedule,

    #[error("Submission error: {0}")]
    Submission(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
