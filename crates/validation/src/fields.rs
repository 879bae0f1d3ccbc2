//! Single-field validators for form inputs.
//!
//! Each validator is a pure function from a raw string to a
//! [`ValidationReport`]; only the deadline check additionally consults an
//! injected [`Clock`].

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::clock::Clock;
use crate::config::QueryLimits;
use crate::report::{ErrorKind, FieldError, ValidationReport};

/// Deliberately simplified `local@domain.tld` shape, not RFC 5322.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email pattern compiles")
});

/// Date formats accepted by the form inputs, tried after RFC 3339.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d/%m/%Y"];

// ── Text fields ──────────────────────────────────────────────────────────────

/// Validate a free-text search query against explicit length limits.
pub fn validate_query(input: &str, limits: &QueryLimits) -> ValidationReport {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return ValidationReport::fail(FieldError::new(
            "query",
            ErrorKind::Required,
            "Η αναζήτηση δεν μπορεί να είναι κενή",
        ));
    }
    let len = trimmed.chars().count();
    if len < limits.min_len {
        return ValidationReport::fail(FieldError::new(
            "query",
            ErrorKind::TooShort,
            format!(
                "Η αναζήτηση πρέπει να έχει τουλάχιστον {} χαρακτήρες",
                limits.min_len
            ),
        ));
    }
    if len > limits.max_len {
        return ValidationReport::fail(FieldError::new(
            "query",
            ErrorKind::TooLong,
            format!(
                "Η αναζήτηση δεν μπορεί να υπερβαίνει τους {} χαρακτήρες",
                limits.max_len
            ),
        ));
    }
    ValidationReport::ok()
}

pub fn validate_email(input: &str) -> ValidationReport {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return ValidationReport::fail(FieldError::new(
            "email",
            ErrorKind::Required,
            "Το email είναι υποχρεωτικό",
        ));
    }
    if !EMAIL_RE.is_match(trimmed) {
        return ValidationReport::fail(FieldError::new(
            "email",
            ErrorKind::BadFormat,
            "Μη έγκυρη διεύθυνση email",
        ));
    }
    ValidationReport::ok()
}

/// Validate a Greek domestic phone number: exactly 10 digits once internal
/// whitespace is stripped. No `+` or country-code handling.
pub fn validate_phone(input: &str) -> ValidationReport {
    let digits: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.is_empty() {
        return ValidationReport::fail(FieldError::new(
            "phone",
            ErrorKind::Required,
            "Το τηλέφωνο είναι υποχρεωτικό",
        ));
    }
    if digits.len() != 10 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return ValidationReport::fail(FieldError::new(
            "phone",
            ErrorKind::BadFormat,
            "Το τηλέφωνο πρέπει να αποτελείται από 10 ψηφία",
        ));
    }
    ValidationReport::ok()
}

// ── Dates ────────────────────────────────────────────────────────────────────

/// Parse a date input keeping the wall-clock time as written.
///
/// Accepts RFC 3339, `YYYY-MM-DDTHH:MM:SS`, and the date-only formats in
/// [`DATE_FORMATS`]; date-only input maps to midnight.
pub(crate) fn parse_naive(input: &str) -> Option<NaiveDateTime> {
    let trimmed = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt);
    }
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Some(date.and_hms_opt(0, 0, 0)?);
        }
    }
    None
}

/// Parse a date input to a UTC instant for comparison against a clock.
pub(crate) fn parse_instant(input: &str) -> Option<DateTime<Utc>> {
    let trimmed = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }
    parse_naive(trimmed).map(|dt| Utc.from_utc_datetime(&dt))
}

pub fn validate_date(input: &str) -> ValidationReport {
    if input.trim().is_empty() {
        return ValidationReport::fail(FieldError::new(
            "date",
            ErrorKind::Required,
            "Η ημερομηνία είναι υποχρεωτική",
        ));
    }
    match parse_naive(input) {
        Some(_) => ValidationReport::ok(),
        None => ValidationReport::fail(FieldError::new(
            "date",
            ErrorKind::BadDate,
            "Μη έγκυρη ημερομηνία",
        )),
    }
}

/// Validate a deadline: a parseable date that is strictly in the future
/// relative to `clock`.
pub fn validate_deadline(input: &str, clock: &dyn Clock) -> ValidationReport {
    if input.trim().is_empty() {
        return ValidationReport::fail(FieldError::new(
            "deadline",
            ErrorKind::Required,
            "Η προθεσμία είναι υποχρεωτική",
        ));
    }
    let Some(instant) = parse_instant(input) else {
        return ValidationReport::fail(FieldError::new(
            "deadline",
            ErrorKind::BadDate,
            "Μη έγκυρη ημερομηνία",
        ));
    };
    if instant <= clock.now() {
        return ValidationReport::fail(FieldError::new(
            "deadline",
            ErrorKind::PastDeadline,
            "Η προθεσμία δεν μπορεί να είναι στο παρελθόν",
        ));
    }
    ValidationReport::ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    #[test]
    fn query_respects_injected_limits() {
        let limits = QueryLimits::new(5, 10).unwrap();

        assert_eq!(
            validate_query("   ", &limits).errors[0].kind,
            ErrorKind::Required
        );
        assert_eq!(
            validate_query("abcd", &limits).errors[0].kind,
            ErrorKind::TooShort
        );
        assert_eq!(
            validate_query("abcdefghijk", &limits).errors[0].kind,
            ErrorKind::TooLong
        );
        assert!(validate_query("abcde", &limits).is_valid);
        assert!(validate_query("abcdefghij", &limits).is_valid);
    }

    #[test]
    fn query_length_counts_chars_not_bytes() {
        let limits = QueryLimits::new(3, 5).unwrap();
        // 4 Greek letters, 8 bytes
        assert!(validate_query("αβγδ", &limits).is_valid);
    }

    #[test]
    fn email_shapes() {
        assert!(validate_email("info@example.gr").is_valid);
        assert!(validate_email("  info@example.gr  ").is_valid);
        assert!(validate_email("a.b+c@sub.domain.com").is_valid);

        assert_eq!(validate_email("").errors[0].kind, ErrorKind::Required);
        assert_eq!(
            validate_email("not-an-email").errors[0].kind,
            ErrorKind::BadFormat
        );
        assert!(!validate_email("a@b").is_valid);
        assert!(!validate_email("@example.gr").is_valid);
    }

    #[test]
    fn phone_ten_digits_after_stripping_spaces() {
        assert!(validate_phone("6912345678").is_valid);
        assert!(validate_phone("69 1234 5678").is_valid);
        assert!(validate_phone("210 123 4567").is_valid);

        assert_eq!(validate_phone("").errors[0].kind, ErrorKind::Required);
        assert!(!validate_phone("691234567").is_valid);
        assert!(!validate_phone("69123456789").is_valid);
        assert!(!validate_phone("+306912345678").is_valid);
        assert!(!validate_phone("69123A5678").is_valid);
    }

    #[test]
    fn date_parsing() {
        assert!(validate_date("2026-03-15").is_valid);
        assert!(validate_date("15/03/2026").is_valid);
        assert!(validate_date("2026-03-15T14:02:26Z").is_valid);
        assert!(validate_date("2026-03-15T14:02:26").is_valid);

        assert_eq!(validate_date("").errors[0].kind, ErrorKind::Required);
        assert_eq!(
            validate_date("2026-02-30").errors[0].kind,
            ErrorKind::BadDate
        );
        assert_eq!(
            validate_date("not a date").errors[0].kind,
            ErrorKind::BadDate
        );
    }

    #[test]
    fn deadline_depends_on_clock() {
        let clock = FixedClock(Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap());

        assert_eq!(
            validate_deadline("2026-01-14", &clock).errors[0].kind,
            ErrorKind::PastDeadline
        );
        assert!(validate_deadline("2026-01-16", &clock).is_valid);

        // the same literal input flips as the clock advances
        let later = FixedClock(Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap());
        assert_eq!(
            validate_deadline("2026-01-16", &later).errors[0].kind,
            ErrorKind::PastDeadline
        );
    }

    #[test]
    fn deadline_must_be_strictly_future() {
        let clock = FixedClock(Utc.with_ymd_and_hms(2026, 1, 15, 0, 0, 0).unwrap());
        // midnight of the same day is not strictly after the clock
        assert_eq!(
            validate_deadline("2026-01-15", &clock).errors[0].kind,
            ErrorKind::PastDeadline
        );
        assert!(validate_deadline("2026-01-15T00:00:01Z", &clock).is_valid);
    }

    #[test]
    fn unparseable_deadline_reports_bad_date() {
        let clock = FixedClock(Utc.with_ymd_and_hms(2026, 1, 15, 0, 0, 0).unwrap());
        assert_eq!(
            validate_deadline("soon", &clock).errors[0].kind,
            ErrorKind::BadDate
        );
    }
}
