//! Registration validation rules.
//!
//! Every rule is a pure function of its input (and, for the age rule, of the
//! reference date passed in by the caller). Failures are returned as
//! [`ValidationError`] values and never panic.

pub mod age;
pub mod email;
pub mod form;
pub mod identity;
pub mod outcome;
pub mod postal_code;

pub use age::{age_on, validate_age, BirthDate, MINIMUM_AGE};
pub use email::validate_email;
pub use form::{
    accept, field_errors, first_error, validate_field, validate_form, validate_user, Registration,
    ValidRegistration,
};
pub use identity::{contains_xss, validate_city, validate_identity, validate_name};
pub use outcome::{ErrorCode, Field, ValidationError, ValidationOutcome};
pub use postal_code::validate_postal_code;
