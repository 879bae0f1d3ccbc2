//! Validation result types shared by every validator in the crate.

use serde::{Deserialize, Serialize};

// ── Error kinds ──────────────────────────────────────────────────────────────

/// Machine-readable classification of a validation failure.
///
/// The UI branches on the kind (highlighting a field, picking an icon) while
/// [`FieldError::message`] carries the Greek text shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Required,
    TooShort,
    TooLong,
    BadFormat,
    BadChecksum,
    BadDate,
    OutOfRange,
    PastDeadline,
}

/// A single violated rule on a named input field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub kind: ErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            kind,
            message: message.into(),
        }
    }
}

// ── Report ───────────────────────────────────────────────────────────────────

/// Outcome of a validation call.
///
/// Invariant: `is_valid` is true iff `errors` is empty. Reports accumulate
/// every violated rule rather than stopping at the first failure; the only
/// short-circuits are checks that are meaningless once an earlier one failed
/// (e.g. the ΑΦΜ checksum after a length error).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<FieldError>,
}

impl ValidationReport {
    /// A report with no violations.
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    /// A report with a single violation.
    pub fn fail(error: FieldError) -> Self {
        Self {
            is_valid: false,
            errors: vec![error],
        }
    }

    pub fn push(&mut self, error: FieldError) {
        self.is_valid = false;
        self.errors.push(error);
    }

    /// Append another report's errors, preserving their order.
    pub fn merge(&mut self, other: ValidationReport) {
        if !other.errors.is_empty() {
            self.is_valid = false;
            self.errors.extend(other.errors);
        }
    }

    /// Display strings in the order the rules were violated.
    pub fn messages(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.message.as_str()).collect()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::ok()
    }
}
