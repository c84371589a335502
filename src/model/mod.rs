//! # Schedule Model
//!
//! Plain DTOs shared by the calculator, the export writer and the
//! submission layer.
//!
//! Design rule: no I/O, no state, no async in this module.

pub mod profile;
pub mod sanskar;

pub use profile::{Gender, PersonProfile, ProfileInput, DOB_INPUT_FORMAT};
pub use sanskar::{OffsetRule, OffsetUnit, SanskarDefinition, SanskarResult};
