//! The sixteen ceremonies in canonical order.
//!
//! Order is load-bearing: the submission record takes the first entry's date.

use crate::model::{OffsetRule, OffsetUnit, SanskarDefinition};

/// Number of ceremonies in every schedule.
pub const SANSKAR_COUNT: usize = 16;

/// Placeholder date for ceremonies that precede conception.
pub const ASTROLOGER_PLACEHOLDER: &str = "Ceremonial date determined by astrologer";

const fn days(amount: i32) -> OffsetRule {
    OffsetRule::FixedOffset { unit: OffsetUnit::Days, amount }
}

const fn months(amount: i32) -> OffsetRule {
    OffsetRule::FixedOffset { unit: OffsetUnit::Months, amount }
}

const fn years(amount: i32) -> OffsetRule {
    OffsetRule::FixedOffset { unit: OffsetUnit::Years, amount }
}

const fn def(
    name: &'static str,
    description: &'static str,
    traditional_timing: &'static str,
    offset_rule: OffsetRule,
) -> SanskarDefinition {
    SanskarDefinition { name, description, traditional_timing, offset_rule }
}

pub static SANSKARS: [SanskarDefinition; SANSKAR_COUNT] = [
    def(
        "Garbhadhana",
        "Conception ceremony",
        "Before conception",
        OffsetRule::NoDate { placeholder: ASTROLOGER_PLACEHOLDER, age_label: "Before birth" },
    ),
    def("Pumsavana", "Fetus protection ceremony", "3rd month of pregnancy", months(-6)),
    def("Simantonnayana", "Parting of hair ceremony", "7th month of pregnancy", months(-2)),
    def("Jatakarma", "Birth ceremony", "At birth", days(0)),
    def("Namakarana", "Naming ceremony", "11th day after birth", days(11)),
    def("Nishkramana", "First outing ceremony", "4th month after birth", months(4)),
    def("Annaprashana", "First feeding ceremony", "6th month after birth", months(6)),
    def("Chudakarana", "First haircut ceremony", "3rd year", years(3)),
    // Text allows the 5th year too; the schedule always uses the 3rd.
    def("Karnavedha", "Ear-piercing ceremony", "3rd or 5th year", years(3)),
    def("Vidyarambha", "Learning ceremony", "5th year", years(5)),
    // Varna is not collected, so the 8-year timing applies to everyone.
    def(
        "Upanayana",
        "Sacred thread ceremony",
        "8th year for Brahmins, 11th for Kshatriyas, 12th for Vaishyas",
        years(8),
    ),
    def("Vedarambha", "Beginning Vedic study", "After Upanayana", years(9)),
    def("Samavartana", "End of formal education", "16th to 24th year", years(18)),
    def(
        "Vivaha",
        "Marriage ceremony",
        "After Samavartana",
        OffsetRule::GenderConditionalYears { male: 25, female: 22, other: 22 },
    ),
    def(
        "Grihastha",
        "Becoming a householder",
        "After Vivaha",
        OffsetRule::GenderConditionalYears { male: 26, female: 23, other: 23 },
    ),
    def(
        "Vanaprastha",
        "Retirement ceremony",
        "After 50 years or when grandchildren arrive",
        years(50),
    ),
];

/// Look up a definition by ceremony name.
pub fn definition(name: &str) -> Option<&'static SanskarDefinition> {
    SANSKARS.iter().find(|d| d.name == name)
}
