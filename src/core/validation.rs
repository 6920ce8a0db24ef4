//! Input validation predicates
//!
//! Pure checks for email and date well-formedness. Callers (the CLI prompt
//! loops) re-prompt until a value passes; the operations themselves assume
//! pre-validated input.

use chrono::{Local, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

/// Date format used throughout the system (`YYYY-MM-DD`)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Whether `email` matches a standard address shape
/// (local-part `@` domain `.` TLD of at least two letters)
#[must_use]
pub fn validate_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Whether `date_str` parses as a real calendar date in `YYYY-MM-DD` format
///
/// Rejects impossible dates such as `2024-13-40`, not just malformed strings.
#[must_use]
pub fn validate_date(date_str: &str) -> bool {
    NaiveDate::parse_from_str(date_str, DATE_FORMAT).is_ok()
}

/// Today's local date as a `YYYY-MM-DD` string
#[must_use]
pub fn today() -> String {
    Local::now().format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(validate_email("jane@example.com"));
        assert!(validate_email("jane.doe+tag@mail.example.co"));
        assert!(validate_email("j_d%42@sub.example.org"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!validate_email(""));
        assert!(!validate_email("jane"));
        assert!(!validate_email("jane@example"));
        assert!(!validate_email("jane@example.c"));
        assert!(!validate_email("@example.com"));
        assert!(!validate_email("jane doe@example.com"));
    }

    #[test]
    fn test_valid_dates() {
        assert!(validate_date("2000-01-01"));
        assert!(validate_date("2024-02-29")); // leap year
    }

    #[test]
    fn test_invalid_dates() {
        assert!(!validate_date(""));
        assert!(!validate_date("2024-13-40"));
        assert!(!validate_date("2023-02-29")); // not a leap year
        assert!(!validate_date("01-01-2000"));
        assert!(!validate_date("2000/01/01"));
    }

    #[test]
    fn test_today_is_well_formed() {
        assert!(validate_date(&today()));
    }
}
