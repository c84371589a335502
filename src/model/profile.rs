//! The person a schedule is computed for.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Input date format for `ProfileInput::dob`.
pub const DOB_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Gender as collected by the form. Only Vivaha and Grihastha depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(Error::InvalidProfile(format!("unrecognized gender '{s}'"))),
        }
    }
}

/// Validated personal and birth details.
///
/// Business rules (name length, email syntax, birth date between 1900-01-01
/// and today) belong to the form layer and are not re-checked here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonProfile {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
}

impl PersonProfile {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        gender: Gender,
        date_of_birth: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: None,
            gender,
            date_of_birth,
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }
}

/// Raw form submission, every field as posted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub dob: Option<String>,
}

impl TryFrom<ProfileInput> for PersonProfile {
    type Error = Error;

    /// Structural validation only: the birth date must be present and a real
    /// `YYYY-MM-DD` date, the gender one of the three known tags.
    fn try_from(input: ProfileInput) -> Result<Self> {
        let dob = input
            .dob
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| Error::InvalidProfile("date of birth is required".into()))?;
        let date_of_birth = NaiveDate::parse_from_str(dob, DOB_INPUT_FORMAT).map_err(|e| {
            Error::InvalidProfile(format!("malformed date of birth '{dob}': {e}"))
        })?;

        let gender = input
            .gender
            .as_deref()
            .ok_or_else(|| Error::InvalidProfile("gender is required".into()))?
            .parse::<Gender>()?;

        let phone = input
            .phone
            .map(|p| p.trim().to_owned())
            .filter(|p| !p.is_empty());

        Ok(Self {
            name: input.name,
            email: input.email,
            phone,
            gender,
            date_of_birth,
        })
    }
}
