use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable, machine-readable category of a validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Value missing, blank, or of the wrong kind
    InvalidInput,
    /// Birth date missing or unparsable
    InvalidDate,
    /// Birth date after the reference date
    FutureDate,
    AgeUnder18,
    /// Postal code or email does not have the expected shape
    InvalidFormat,
    XssDetected,
    InvalidCharacters,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::InvalidDate => "INVALID_DATE",
            ErrorCode::FutureDate => "FUTURE_DATE",
            ErrorCode::AgeUnder18 => "AGE_UNDER_18",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::XssDetected => "XSS_DETECTED",
            ErrorCode::InvalidCharacters => "INVALID_CHARACTERS",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rejected value: the failure category plus a message fit for display
/// next to the offending form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub code: ErrorCode,
    pub message: String,
}

impl ValidationError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ValidationError {
            code,
            message: message.into(),
        }
    }

    /// Error for a field that was absent or blank
    pub fn required(field: Field) -> Self {
        let code = match field {
            Field::BirthDate => ErrorCode::InvalidDate,
            _ => ErrorCode::InvalidInput,
        };
        ValidationError::new(code, format!("{} is required", field.label()))
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Result of validating one value: the normalized value on success, or the
/// reason it was rejected.
pub type ValidationOutcome<T> = Result<T, ValidationError>;

/// The fields of a registration, named as the form sends them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    BirthDate,
    City,
    PostalCode,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::BirthDate,
        Field::City,
        Field::PostalCode,
    ];

    /// Wire name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::BirthDate => "birthDate",
            Field::City => "city",
            Field::PostalCode => "postalCode",
        }
    }

    /// Human-readable name used in messages
    pub fn label(&self) -> &'static str {
        match self {
            Field::FirstName => "First name",
            Field::LastName => "Last name",
            Field::Email => "Email",
            Field::BirthDate => "Birth date",
            Field::City => "City",
            Field::PostalCode => "Postal code",
        }
    }

    pub fn parse(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|field| field.as_str() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
