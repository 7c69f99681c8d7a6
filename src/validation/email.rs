use lazy_static::lazy_static;
use regex::Regex;

use super::outcome::{ErrorCode, Field, ValidationError, ValidationOutcome};

lazy_static! {
    /// Local part of common symbols, then at least two dot-separated domain
    /// labels of 1-63 alphanumerics/hyphens that neither start nor end with
    /// a hyphen.
    static ref EMAIL: Regex = Regex::new(concat!(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+",
        r"@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?",
        r"(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$",
    ))
    .unwrap();
}

/// Validates the shape of an email address.
pub fn validate_email(email: &str) -> ValidationOutcome<String> {
    if email.trim().is_empty() {
        return Err(ValidationError::required(Field::Email));
    }

    if !EMAIL.is_match(email) {
        return Err(ValidationError::new(
            ErrorCode::InvalidFormat,
            "Invalid email format",
        ));
    }

    Ok(email.to_string())
}
