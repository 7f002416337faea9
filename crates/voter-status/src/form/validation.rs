use super::document::{FormField, Region};
use crate::eligibility::EligibilityRules;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

const MIN_NAME_CHARS: usize = 2;

/// User-correctable input problems. The display text doubles as the inline message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, thiserror::Error)]
#[serde(rename_all = "kebab-case")]
pub enum FieldError {
    #[error("Please enter a valid name with at least 2 characters.")]
    InvalidName,
    #[error("Please select a birth date.")]
    MissingDate,
    #[error("Please enter the birth date as YYYY-MM-DD.")]
    MalformedDate,
    #[error("The birth date cannot be in the future.")]
    FutureDate,
    #[error("Please check the birth date.")]
    ImplausibleDate,
}

impl FieldError {
    pub const fn field(self) -> FormField {
        match self {
            Self::InvalidName => FormField::FullName,
            Self::MissingDate | Self::MalformedDate | Self::FutureDate | Self::ImplausibleDate => {
                FormField::BirthDate
            }
        }
    }

    pub const fn region(self) -> Region {
        match self.field() {
            FormField::FullName => Region::NameError,
            FormField::BirthDate => Region::DateError,
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::InvalidName => "invalid-name",
            Self::MissingDate => "missing-date",
            Self::MalformedDate => "malformed-date",
            Self::FutureDate => "future-date",
            Self::ImplausibleDate => "implausible-date",
        }
    }
}

/// Inputs that passed every rule, ready for age computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSubmission {
    pub full_name: String,
    pub birth_date: NaiveDate,
}

/// Checks both fields independently and reports every failing one.
pub fn validate(
    raw_name: &str,
    raw_birth_date: &str,
    today: NaiveDate,
    rules: &EligibilityRules,
) -> Result<ValidatedSubmission, Vec<FieldError>> {
    let name = validate_name(raw_name);
    let birth_date = validate_birth_date(raw_birth_date, today, rules);

    match (name, birth_date) {
        (Ok(full_name), Ok(birth_date)) => Ok(ValidatedSubmission {
            full_name,
            birth_date,
        }),
        (name, birth_date) => Err(name.err().into_iter().chain(birth_date.err()).collect()),
    }
}

fn validate_name(raw: &str) -> Result<String, FieldError> {
    let trimmed = raw.trim();
    if trimmed.chars().count() < MIN_NAME_CHARS {
        return Err(FieldError::InvalidName);
    }
    Ok(trimmed.to_string())
}

fn validate_birth_date(
    raw: &str,
    today: NaiveDate,
    rules: &EligibilityRules,
) -> Result<NaiveDate, FieldError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(FieldError::MissingDate);
    }

    let birth_date =
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| FieldError::MalformedDate)?;

    if birth_date > today {
        return Err(FieldError::FutureDate);
    }

    // Calendar years only; someone born late in the year can be 150 and still pass.
    if today.year() - birth_date.year() > rules.max_plausible_age_years {
        return Err(FieldError::ImplausibleDate);
    }

    Ok(birth_date)
}
