//! # Sanskar Schedule Calculator
//!
//! `PersonProfile` → 16 `SanskarResult`s is a pure function: one pass over
//! the static rule table, each rule evaluated on its own against the birth
//! date and gender.
//!
//! ```text
//! SANSKARS[i].offset_rule ──evaluate(dob, gender)──▶ (computed_date, age_label)
//! ```
//!
//! Dates are formatted before they leave this module; downstream consumers
//! never see a raw `NaiveDate`.

pub mod dates;
pub mod table;

use chrono::NaiveDate;
use tracing::debug;

use crate::model::{Gender, OffsetRule, OffsetUnit, PersonProfile, SanskarDefinition, SanskarResult};
use crate::{Error, Result};

pub use dates::{format_display, DISPLAY_FORMAT};
pub use table::{definition, ASTROLOGER_PLACEHOLDER, SANSKARS, SANSKAR_COUNT};

/// Age label for ceremonies scheduled before birth.
pub const DURING_PREGNANCY: &str = "During pregnancy";
/// Age label for a zero offset.
pub const AT_BIRTH: &str = "At birth";

/// Compute the full ceremony schedule for `profile`.
///
/// All or nothing: either all 16 results in canonical order, or an error.
pub fn compute_schedule(profile: &PersonProfile) -> Result<Vec<SanskarResult>> {
    let schedule = SANSKARS
        .iter()
        .map(|def| evaluate(def, profile.date_of_birth, profile.gender))
        .collect::<Result<Vec<_>>>()?;

    debug!(
        target: "sanskar::schedule",
        dob = %profile.date_of_birth,
        gender = %profile.gender,
        count = schedule.len(),
        "Schedule computed"
    );
    Ok(schedule)
}

/// Evaluate one definition's rule.
pub fn evaluate(def: &SanskarDefinition, dob: NaiveDate, gender: Gender) -> Result<SanskarResult> {
    let (date, label) = match def.offset_rule {
        OffsetRule::NoDate { placeholder, age_label } => {
            (placeholder.to_owned(), age_label.to_owned())
        }
        OffsetRule::FixedOffset { unit, amount } => {
            let date = shifted(def, dob, unit, amount)?;
            (format_display(date), fixed_offset_label(unit, amount))
        }
        OffsetRule::GenderConditionalYears { male, female, other } => {
            let years = OffsetRule::years_for(male, female, other, gender);
            let date = shifted(def, dob, OffsetUnit::Years, years)?;
            (format_display(date), format!("{years} {}", OffsetUnit::Years.label(years)))
        }
    };
    Ok(SanskarResult::from_definition(def, date, label))
}

fn shifted(def: &SanskarDefinition, dob: NaiveDate, unit: OffsetUnit, amount: i32) -> Result<NaiveDate> {
    dates::shift(dob, unit, amount).ok_or_else(|| Error::DateOutOfRange {
        ceremony: def.name.to_owned(),
        message: format!("{dob} shifted by {amount} {}", unit.label(amount)),
    })
}

/// Label for a fixed offset: pre-birth, at birth, or "{amount} {unit}".
pub fn fixed_offset_label(unit: OffsetUnit, amount: i32) -> String {
    match amount {
        a if a < 0 => DURING_PREGNANCY.to_owned(),
        0 => AT_BIRTH.to_owned(),
        a => format!("{a} {}", unit.label(a)),
    }
}
