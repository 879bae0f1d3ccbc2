//! ΑΦΜ (Greek tax registry number) validation.
//!
//! An ΑΦΜ is nine decimal digits where the ninth is a weighted mod-11 check
//! digit computed from the first eight.

use crate::report::{ErrorKind, FieldError, ValidationReport};

const FIELD: &str = "afm";

/// Validate the structure and check digit of an ΑΦΜ.
///
/// Length and charset are checked first; the checksum only runs once the
/// input is known to be exactly nine ASCII digits.
pub fn validate_afm(input: &str) -> ValidationReport {
    if input.is_empty() {
        return ValidationReport::fail(FieldError::new(
            FIELD,
            ErrorKind::Required,
            "Το ΑΦΜ είναι υποχρεωτικό",
        ));
    }
    if input.len() != 9 || !input.bytes().all(|b| b.is_ascii_digit()) {
        return ValidationReport::fail(FieldError::new(
            FIELD,
            ErrorKind::BadFormat,
            "Το ΑΦΜ πρέπει να αποτελείται από 9 ψηφία",
        ));
    }

    let bytes = input.as_bytes();
    let mut body = [0u32; 8];
    for (i, b) in bytes[..8].iter().enumerate() {
        body[i] = u32::from(b - b'0');
    }
    let declared = u32::from(bytes[8] - b'0');

    if afm_check_digit(&body) != declared {
        return ValidationReport::fail(FieldError::new(
            FIELD,
            ErrorKind::BadChecksum,
            "Μη έγκυρο ΑΦΜ",
        ));
    }
    ValidationReport::ok()
}

/// Expected check digit for the first eight digits of an ΑΦΜ.
///
/// Weighted sum with weights 2^8 down to 2^1, taken mod 11; remainders 0 and
/// 1 map to themselves, anything else to `11 - remainder`.
pub fn afm_check_digit(body: &[u32; 8]) -> u32 {
    let sum: u32 = body.iter().enumerate().map(|(i, d)| *d << (8 - i)).sum();
    let remainder = sum % 11;
    if remainder < 2 {
        remainder
    } else {
        11 - remainder
    }
}
