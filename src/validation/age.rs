use chrono::{DateTime, Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::outcome::{ErrorCode, Field, ValidationError, ValidationOutcome};

/// Minimum age, in whole years, to register
pub const MINIMUM_AGE: u32 = 18;

/// A birth date as supplied by the caller: either an already-parsed calendar
/// date or the raw text of a date input.
///
/// Text is accepted as `YYYY-MM-DD` or as an RFC 3339 timestamp
/// (e.g. `1998-03-22T00:00:00.000Z`), whose calendar date is used as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BirthDate {
    Date(NaiveDate),
    Text(String),
}

impl BirthDate {
    /// Resolve to a calendar date
    pub fn to_date(&self) -> ValidationOutcome<NaiveDate> {
        match self {
            BirthDate::Date(date) => Ok(*date),
            BirthDate::Text(text) => parse_birth_date(text),
        }
    }
}

impl From<NaiveDate> for BirthDate {
    fn from(date: NaiveDate) -> Self {
        BirthDate::Date(date)
    }
}

impl From<&str> for BirthDate {
    fn from(text: &str) -> Self {
        BirthDate::Text(text.to_string())
    }
}

impl From<String> for BirthDate {
    fn from(text: String) -> Self {
        BirthDate::Text(text)
    }
}

fn parse_birth_date(text: &str) -> ValidationOutcome<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ValidationError::required(Field::BirthDate));
    }

    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Ok(date);
    }

    DateTime::parse_from_rfc3339(text)
        .map(|dt| dt.date_naive())
        .map_err(|_| ValidationError::new(ErrorCode::InvalidDate, "Invalid birth date"))
}

/// Age in whole years on `today` for someone born on `birth`.
///
/// Returns `None` when `birth` is after `today`. A Feb 29 birthday is only
/// reached on Mar 1 in non-leap years.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> Option<u32> {
    if birth > today {
        return None;
    }

    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }

    u32::try_from(age).ok()
}

/// Checks that the person born on `birth_date` is at least 18 on `today`.
///
/// On success returns the computed age.
pub fn validate_age(birth_date: &BirthDate, today: NaiveDate) -> ValidationOutcome<u32> {
    let birth = birth_date.to_date()?;

    let age = age_on(birth, today).ok_or_else(|| {
        ValidationError::new(ErrorCode::FutureDate, "Birth date cannot be in the future")
    })?;

    if age < MINIMUM_AGE {
        return Err(ValidationError::new(
            ErrorCode::AgeUnder18,
            format!(
                "User is {} years old. The minimum required age is {} years.",
                age, MINIMUM_AGE
            ),
        ));
    }

    Ok(age)
}
