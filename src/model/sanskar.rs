//! Ceremony definitions, their offset rules, and computed results.

use serde::{Deserialize, Serialize};

use super::Gender;

/// Unit of a fixed offset from the birth date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffsetUnit {
    Days,
    Months,
    Years,
}

impl OffsetUnit {
    /// Unit name for a label, singular for a magnitude of one.
    pub fn label(&self, amount: i32) -> &'static str {
        let singular = amount.unsigned_abs() == 1;
        match (self, singular) {
            (OffsetUnit::Days, true) => "day",
            (OffsetUnit::Days, false) => "days",
            (OffsetUnit::Months, true) => "month",
            (OffsetUnit::Months, false) => "months",
            (OffsetUnit::Years, true) => "year",
            (OffsetUnit::Years, false) => "years",
        }
    }
}

/// How a ceremony's date is derived from the birth date.
///
/// Every rule is an absolute offset from birth; no rule refers to another
/// ceremony's date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum OffsetRule {
    /// No computable date.
    NoDate {
        placeholder: &'static str,
        age_label: &'static str,
    },
    /// Birth date shifted by `amount` units; negative amounts precede birth.
    FixedOffset { unit: OffsetUnit, amount: i32 },
    /// Birth date plus a gender-dependent number of years.
    GenderConditionalYears { male: i32, female: i32, other: i32 },
}

impl OffsetRule {
    /// Years selected for `gender` by a gender-conditional rule.
    pub fn years_for(male: i32, female: i32, other: i32, gender: Gender) -> i32 {
        match gender {
            Gender::Male => male,
            Gender::Female => female,
            Gender::Other => other,
        }
    }
}

/// One of the sixteen ceremonies, as stored in the static rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SanskarDefinition {
    pub name: &'static str,
    pub description: &'static str,
    /// Free text shown to the user; never interpreted.
    pub traditional_timing: &'static str,
    pub offset_rule: OffsetRule,
}

/// A ceremony with its computed, display-ready date and age label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanskarResult {
    pub name: String,
    pub description: String,
    pub traditional_timing: String,
    pub computed_date: String,
    pub computed_age_label: String,
}

impl SanskarResult {
    pub(crate) fn from_definition(
        def: &SanskarDefinition,
        computed_date: String,
        computed_age_label: String,
    ) -> Self {
        Self {
            name: def.name.to_owned(),
            description: def.description.to_owned(),
            traditional_timing: def.traditional_timing.to_owned(),
            computed_date,
            computed_age_label,
        }
    }
}
