use lazy_static::lazy_static;
use regex::Regex;

use super::outcome::{ErrorCode, Field, ValidationError, ValidationOutcome};

lazy_static! {
    // `\d` is Unicode-aware in the regex crate, so spell out ASCII digits.
    static ref POSTAL_CODE: Regex = Regex::new(r"^[0-9]{5}$").unwrap();
}

/// Validates a French postal code: exactly five decimal digits, nothing else.
pub fn validate_postal_code(postal_code: &str) -> ValidationOutcome<String> {
    if postal_code.trim().is_empty() {
        return Err(ValidationError::required(Field::PostalCode));
    }

    if !POSTAL_CODE.is_match(postal_code) {
        return Err(ValidationError::new(
            ErrorCode::InvalidFormat,
            "Postal code must contain exactly 5 digits",
        ));
    }

    Ok(postal_code.to_string())
}
