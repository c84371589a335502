//! Calendar arithmetic and display formatting.
//!
//! Month and year shifts clamp to the last day of the target month, so a
//! leap day plus one year lands on February 28.

use chrono::{Days, Months, NaiveDate};

use crate::model::OffsetUnit;

/// Display format for every computed date, e.g. "January 05, 2045".
pub const DISPLAY_FORMAT: &str = "%B %d, %Y";

/// Shift `date` by `amount` units. `None` when the result leaves chrono's range.
pub fn shift(date: NaiveDate, unit: OffsetUnit, amount: i32) -> Option<NaiveDate> {
    let magnitude = amount.unsigned_abs();
    match unit {
        OffsetUnit::Days => {
            let days = Days::new(u64::from(magnitude));
            if amount < 0 {
                date.checked_sub_days(days)
            } else {
                date.checked_add_days(days)
            }
        }
        OffsetUnit::Months => shift_months(date, amount < 0, magnitude),
        OffsetUnit::Years => shift_months(date, amount < 0, magnitude.checked_mul(12)?),
    }
}

fn shift_months(date: NaiveDate, backwards: bool, months: u32) -> Option<NaiveDate> {
    let months = Months::new(months);
    if backwards {
        date.checked_sub_months(months)
    } else {
        date.checked_add_months(months)
    }
}

pub fn format_display(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}
