use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::age::{validate_age, BirthDate};
use super::email::validate_email;
use super::identity::{check_name, validate_city};
use super::outcome::{Field, ValidationError, ValidationOutcome};
use super::postal_code::validate_postal_code;

/// Order in which a whole record is checked
const CHECK_ORDER: [Field; 6] = [
    Field::BirthDate,
    Field::PostalCode,
    Field::FirstName,
    Field::LastName,
    Field::Email,
    Field::City,
];

/// A candidate registration as submitted by the form. Every field may be
/// missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<BirthDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

impl Registration {
    /// Builds a record from arbitrary JSON.
    ///
    /// Anything that is not an object yields an empty record, and any field
    /// that is not a string is treated as missing.
    pub fn from_json(value: &Value) -> Registration {
        let text = |field: Field| {
            value
                .get(field.as_str())
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        Registration {
            first_name: text(Field::FirstName),
            last_name: text(Field::LastName),
            email: text(Field::Email),
            birth_date: text(Field::BirthDate).map(BirthDate::Text),
            city: text(Field::City),
            postal_code: text(Field::PostalCode),
        }
    }

    fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::FirstName => self.first_name.as_deref(),
            Field::LastName => self.last_name.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::City => self.city.as_deref(),
            Field::PostalCode => self.postal_code.as_deref(),
            // dates are checked through `birth_date` directly
            Field::BirthDate => None,
        }
    }
}

/// A registration that passed every rule, with normalized values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidRegistration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub birth_date: NaiveDate,
    pub age: u32,
    pub city: String,
    pub postal_code: String,
}

/// Runs the rule for one field on its raw text value, as done when the
/// field loses focus. Returns the normalized value as JSON.
pub fn validate_field(field: Field, value: &str, today: NaiveDate) -> ValidationOutcome<Value> {
    match field {
        Field::BirthDate => validate_age(&BirthDate::from(value), today).map(Value::from),
        Field::PostalCode => validate_postal_code(value).map(Value::from),
        Field::FirstName | Field::LastName => check_name(value, field.label()).map(Value::from),
        Field::Email => validate_email(value).map(Value::from),
        Field::City => validate_city(value).map(Value::from),
    }
}

fn check(record: &Registration, field: Field, today: NaiveDate) -> ValidationOutcome<Value> {
    if let (Field::BirthDate, Some(birth_date)) = (field, &record.birth_date) {
        return validate_age(birth_date, today).map(Value::from);
    }

    match record.text(field) {
        Some(value) => validate_field(field, value, today),
        None => Err(ValidationError::required(field)),
    }
}

/// First failing field, checking birth date, postal code, first name, last
/// name, email and city in that order.
pub fn first_error(record: &Registration, today: NaiveDate) -> Option<(Field, ValidationError)> {
    CHECK_ORDER
        .into_iter()
        .find_map(|field| check(record, field, today).err().map(|err| (field, err)))
}

/// Every failing field with its error
pub fn field_errors(record: &Registration, today: NaiveDate) -> BTreeMap<Field, ValidationError> {
    CHECK_ORDER
        .into_iter()
        .filter_map(|field| check(record, field, today).err().map(|err| (field, err)))
        .collect()
}

/// Submission gate: true only when all six fields are present and valid.
pub fn validate_form(record: &Registration, today: NaiveDate) -> bool {
    first_error(record, today).is_none()
}

/// Whole-record check where the city is only validated when supplied.
pub fn validate_user(record: &Registration, today: NaiveDate) -> bool {
    CHECK_ORDER
        .into_iter()
        .filter(|field| *field != Field::City || record.city.is_some())
        .all(|field| check(record, field, today).is_ok())
}

/// Validates the whole record and returns the normalized registration, or
/// every field error.
pub fn accept(
    record: &Registration,
    today: NaiveDate,
) -> Result<ValidRegistration, BTreeMap<Field, ValidationError>> {
    let errors = field_errors(record, today);
    if !errors.is_empty() {
        return Err(errors);
    }

    let missing = |field: Field| BTreeMap::from([(field, ValidationError::required(field))]);
    let text = |field: Field| {
        record
            .text(field)
            .map(str::to_string)
            .ok_or_else(|| missing(field))
    };

    let birth_date = record
        .birth_date
        .as_ref()
        .ok_or_else(|| missing(Field::BirthDate))?;
    let invalid_birth = |err: ValidationError| BTreeMap::from([(Field::BirthDate, err)]);
    let birth = birth_date.to_date().map_err(invalid_birth)?;
    let age = validate_age(birth_date, today).map_err(invalid_birth)?;

    Ok(ValidRegistration {
        first_name: text(Field::FirstName)?,
        last_name: text(Field::LastName)?,
        email: text(Field::Email)?,
        birth_date: birth,
        age,
        city: text(Field::City)?,
        postal_code: text(Field::PostalCode)?,
    })
}
