//! Name and city rules.
//!
//! The injection check is a denylist heuristic that gives script-shaped
//! input a distinct error. It does not replace output encoding when the
//! value is rendered.

use lazy_static::lazy_static;
use regex::{Regex, RegexSet};

use super::outcome::{ErrorCode, ValidationError, ValidationOutcome};

lazy_static! {
    static ref XSS_SIGNATURES: RegexSet = RegexSet::new([
        r"(?i)<[^>]*>",
        r"(?i)javascript:",
        r"(?i)on\w+\s*=",
        r"(?i)%3C",
        r"(?i)%3E",
        r"(?i)&lt;",
        r"(?i)&gt;",
        r"(?i)expression\s*\(",
        r"(?i)url\s*\(",
    ])
    .unwrap();

    /// Letters in any script (with combining accents), spaces, hyphens and
    /// apostrophes
    static ref NAME_CHARACTERS: Regex = Regex::new(r"^[\p{L}\p{M} '’\-]+$").unwrap();
}

/// Whether `text` matches one of the known script injection shapes
pub fn contains_xss(text: &str) -> bool {
    XSS_SIGNATURES.is_match(text)
}

fn require(text: &str, label: &str) -> ValidationOutcome<()> {
    if text.trim().is_empty() {
        return Err(ValidationError::new(
            ErrorCode::InvalidInput,
            format!("{} is required", label),
        ));
    }
    Ok(())
}

fn reject_xss(texts: &[&str]) -> ValidationOutcome<()> {
    if texts.iter().any(|text| contains_xss(text)) {
        return Err(ValidationError::new(
            ErrorCode::XssDetected,
            "Potential script injection detected",
        ));
    }
    Ok(())
}

fn letters_only(text: &str, label: &str) -> ValidationOutcome<()> {
    if !NAME_CHARACTERS.is_match(text) {
        return Err(ValidationError::new(
            ErrorCode::InvalidCharacters,
            format!("{} must contain only letters", label),
        ));
    }
    Ok(())
}

pub(crate) fn check_name(text: &str, label: &str) -> ValidationOutcome<String> {
    require(text, label)?;
    reject_xss(&[text])?;
    letters_only(text, label)?;
    Ok(text.to_string())
}

/// Validates a first or last name.
pub fn validate_name(name: &str) -> ValidationOutcome<String> {
    check_name(name, "Name")
}

/// Validates both names. Presence is checked for both, then injection
/// signatures in either, then the character class of the first name before
/// the last.
pub fn validate_identity(
    first_name: &str,
    last_name: &str,
) -> ValidationOutcome<(String, String)> {
    require(first_name, "First name")?;
    require(last_name, "Last name")?;
    reject_xss(&[first_name, last_name])?;
    letters_only(first_name, "First name")?;
    letters_only(last_name, "Last name")?;
    Ok((first_name.to_string(), last_name.to_string()))
}

/// Validates a city name: same characters as a person's name.
pub fn validate_city(city: &str) -> ValidationOutcome<String> {
    if city.trim().is_empty() {
        return Err(ValidationError::new(
            ErrorCode::InvalidInput,
            "City is required",
        ));
    }

    if !NAME_CHARACTERS.is_match(city) {
        return Err(ValidationError::new(
            ErrorCode::InvalidCharacters,
            "Invalid city name",
        ));
    }

    Ok(city.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        for name in [
            "Jean",
            "Dupont",
            "Éloïse",
            "Jean-Pierre",
            "O'Brien",
            "D’Artagnan",
            "Marie Claire",
            "Çağlar",
            "Łukasz",
            "Nguyễn",
        ] {
            assert_eq!(validate_name(name), Ok(name.to_string()));
        }
    }

    #[test]
    fn test_script_tag_is_xss_not_bad_characters() {
        let err = validate_name("<script>alert(1)</script>").unwrap_err();
        assert_eq!(err.code, ErrorCode::XssDetected);

        let err = validate_name("Jean123").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidCharacters);
        assert!(err.message.contains("only letters"));
    }

    #[test]
    fn test_xss_signatures() {
        for input in [
            "<img src=x onerror=alert(1)>",
            "Jean onclick=alert(1)",
            "Jean ONMOUSEOVER = x",
            "javascript:alert(1)",
            "JavaScript:void",
            "%3Cscript%3E",
            "%3e",
            "&lt;b&gt;",
            "&GT;",
            "expression(alert(1))",
            "url (http)",
            "<b>",
        ] {
            let err = validate_name(input).unwrap_err();
            assert_eq!(err.code, ErrorCode::XssDetected, "input {:?}", input);
        }
    }

    #[test]
    fn test_invalid_characters() {
        for input in ["Jean@", "Jean_Pierre", "Anne!", "12345", "Jean.Paul"] {
            let err = validate_name(input).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidCharacters, "input {:?}", input);
        }
    }

    #[test]
    fn test_only_plain_spaces_separate_words() {
        for input in ["Jean\nDupont", "Jean\tPierre", "Marie\r\nClaire"] {
            let err = validate_name(input).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidCharacters, "input {:?}", input);
        }

        let err = validate_city("Saint\nDenis").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidCharacters);
    }

    #[test]
    fn test_blank_name_is_required() {
        for input in ["", "  ", "\t"] {
            let err = validate_name(input).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidInput);
        }
    }

    #[test]
    fn test_identity_reports_first_name_first() {
        let err = validate_identity("Jean123", "Dupont456").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidCharacters);
        assert!(err.message.starts_with("First name"));

        let err = validate_identity("Jean", "Dupont123").unwrap_err();
        assert!(err.message.starts_with("Last name"));

        let err = validate_identity("Jean", "<img src=x onerror=alert(1)>").unwrap_err();
        assert_eq!(err.code, ErrorCode::XssDetected);

        let err = validate_identity("Jean", "").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);

        // injection in either name wins over a bad character in the other
        let err = validate_identity("Jean1", "<script>alert(1)</script>").unwrap_err();
        assert_eq!(err.code, ErrorCode::XssDetected);

        let err = validate_identity("javascript:alert(1)", "Dupont2").unwrap_err();
        assert_eq!(err.code, ErrorCode::XssDetected);

        // a blank name is reported before an injection in the other one
        let err = validate_identity("<b>", "  ").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);

        assert_eq!(
            validate_identity("Jean", "Dupont"),
            Ok(("Jean".to_string(), "Dupont".to_string()))
        );
    }

    #[test]
    fn test_city() {
        for city in ["Paris", "Saint-Étienne", "L'Haÿ-les-Roses", "Aix en Provence"] {
            assert_eq!(validate_city(city), Ok(city.to_string()));
        }

        let err = validate_city("Paris 15").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidCharacters);
        assert_eq!(err.message, "Invalid city name");

        let err = validate_city("").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }
}
