//! Schedule export — write a computed schedule as a plain-text document.
//!
//! This is the handoff to a document renderer (PDF, print, email body).
//! Every date in it is already a display string.
//!
//! ```text
//! PersonProfile + [SanskarResult; 16] → export_schedule() → text table
//!   → feed to a PDF templater, or print as is
//! ```

use std::io::Write;

use chrono::NaiveDate;

use crate::model::{PersonProfile, SanskarResult};
use crate::schedule::format_display;
use crate::{Error, Result};

pub const TITLE: &str = "Vedic Academy 16 Sanskars";
pub const TAGLINE: &str = "Know Correct Time for Each Sanskar";
pub const DISCLAIMER: [&str; 2] = [
    "The dates provided are approximations based on traditional guidelines.",
    "For the most accurate timings, please consult with a qualified astrologer.",
];

const HEADERS: [&str; 3] = ["Sanskar", "Proposed Date", "Age"];

/// Export a schedule for `profile` as a plain-text document.
///
/// Rows appear in schedule order. `generated_on` is printed in the
/// personal information block.
pub fn export_schedule(
    profile: &PersonProfile,
    schedule: &[SanskarResult],
    generated_on: NaiveDate,
    writer: &mut dyn Write,
) -> Result<()> {
    if schedule.is_empty() {
        return Err(Error::EmptySchedule);
    }

    // Header
    writeln!(writer, "{TITLE}")?;
    writeln!(writer, "{TAGLINE}")?;
    writeln!(writer)?;

    writeln!(writer, "Personal Information")?;
    writeln!(writer, "Name: {}", profile.name)?;
    writeln!(writer, "Email: {}", profile.email)?;
    if let Some(phone) = &profile.phone {
        writeln!(writer, "Phone: {phone}")?;
    }
    writeln!(writer, "Gender: {}", profile.gender)?;
    writeln!(writer, "Date of Birth: {}", format_display(profile.date_of_birth))?;
    writeln!(writer, "Generated on: {}", format_display(generated_on))?;
    writeln!(writer)?;

    let rows: Vec<[&str; 3]> = schedule
        .iter()
        .map(|r| [r.name.as_str(), r.computed_date.as_str(), r.computed_age_label.as_str()])
        .collect();
    let widths = column_widths(&rows);

    writeln!(writer, "{}", format_row(&HEADERS, &widths))?;
    writeln!(writer, "{}", separator(&widths))?;
    for row in &rows {
        writeln!(writer, "{}", format_row(row, &widths))?;
    }

    writeln!(writer)?;
    for line in DISCLAIMER {
        writeln!(writer, "{line}")?;
    }
    Ok(())
}

/// Widest cell per column, headers included (in chars, not bytes).
fn column_widths(rows: &[[&str; 3]]) -> [usize; 3] {
    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }
    widths
}

fn format_row(cells: &[&str; 3], widths: &[usize; 3]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| format!("{cell:<w$}"))
        .collect();
    format!("| {} |", padded.join(" | "))
}

fn separator(widths: &[usize; 3]) -> String {
    let dashes: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    format!("|-{}-|", dashes.join("-|-"))
}
