//! Field-level validation: the error aggregator and the format patterns.
//!
//! Both services collect violations into a [`ValidationErrors`] value
//! instead of failing on the first one, so callers can report every
//! problem with the input in a single response.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

// Patterns are process-wide constants, compiled exactly once.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9._%+\-]+@[a-z0-9.\-]+\.[a-z]{2,}$").expect("valid email regex"));
static MOBILE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+[1-9]\d{1,14}$").expect("valid mobile regex"));

/// Checks the `local@domain.tld` email format (lowercase ASCII).
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Checks the E.164 mobile format: `+`, leading digit 1-9, 2-15 digits total.
pub fn is_valid_mobile(mobile: &str) -> bool {
    MOBILE_RE.is_match(mobile)
}

/// A single field-level input violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// An ordered aggregate of field-level violations.
///
/// Construct only when at least one violation exists; an empty aggregate
/// is never used as a success sentinel. Callers needing field detail
/// iterate the entries; `Display` gives a single generic description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter()
    }

    /// True when any entry names the given field.
    pub fn contains_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation errors occurred")
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_well_formed_email() {
        assert!(is_valid_email("john.doe@example.com"));
        assert!(is_valid_email("a_b%c+d@mail.co"));
    }

    #[test]
    fn rejects_malformed_email() {
        assert!(!is_valid_email("bad"));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("upper@Example.com"));
        assert!(!is_valid_email("user@domain"));
        assert!(!is_valid_email("user@domain.c"));
    }

    #[test]
    fn accepts_e164_mobile() {
        assert!(is_valid_mobile("+12345678901"));
        assert!(is_valid_mobile("+491711234567"));
        assert!(is_valid_mobile("+12")); // two digits is the minimum
    }

    #[test]
    fn rejects_malformed_mobile() {
        assert!(!is_valid_mobile("12345678901")); // missing plus
        assert!(!is_valid_mobile("+0123456789")); // leading zero
        assert!(!is_valid_mobile("+1")); // one digit
        assert!(!is_valid_mobile("+1234567890123456")); // 16 digits
        assert!(!is_valid_mobile("+12 345")); // whitespace
    }

    #[test]
    fn aggregate_preserves_order_and_fields() {
        let errs = ValidationErrors::new(vec![
            ValidationError::new("Email", "invalid email format"),
            ValidationError::new("Mobile", "invalid mobile format"),
        ]);
        assert_eq!(errs.len(), 2);
        assert!(errs.contains_field("Email"));
        assert!(errs.contains_field("Mobile"));
        assert!(!errs.contains_field("Name"));
        let fields: Vec<_> = errs.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["Email", "Mobile"]);
    }

    #[test]
    fn aggregate_displays_generic_message() {
        let errs = ValidationErrors::new(vec![ValidationError::new("Name", "name cannot be empty")]);
        assert_eq!(format!("{}", errs), "validation errors occurred");
    }

    #[test]
    fn aggregate_serializes_as_pair_list() {
        let errs = ValidationErrors::new(vec![ValidationError::new("Name", "name cannot be empty")]);
        let json = serde_json::to_value(&errs).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{"field": "Name", "message": "name cannot be empty"}])
        );
    }

    proptest! {
        #[test]
        fn any_e164_number_matches(first in 1..=9u32, rest in proptest::collection::vec(0..=9u32, 1..=14)) {
            let digits: String = rest.into_iter().map(|d| char::from_digit(d, 10).unwrap()).collect();
            let mobile = format!("+{first}{digits}");
            prop_assert!(is_valid_mobile(&mobile));
        }

        #[test]
        fn mobile_without_plus_never_matches(s in "[0-9]{2,15}") {
            prop_assert!(!is_valid_mobile(&s));
        }
    }
}
