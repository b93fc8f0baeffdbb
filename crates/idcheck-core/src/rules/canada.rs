//! Canadian Social Insurance Number validation.

use crate::checksum;
use crate::document::DocumentType;
use crate::error::ErrorKind;
use crate::normalize::normalize;
use crate::outcome::ValidationOutcome;

use super::patterns::SIN_SHAPE;

/// Well-known test SINs accepted regardless of their Luhn outcome. An
/// intentional carve-out inherited from the deployed system, not a
/// property of the algorithm.
const TEST_SINS: [&str; 5] = [
    "046454286",
    "123456782",
    "453201511",
    "121212121",
    "046454280",
];

/// Validate a SIN: nine digits passing the Luhn mod-10 check, with the
/// fixed test-number allow-list bypassing the arithmetic entirely.
pub fn validate_sin(raw: &str) -> ValidationOutcome {
    let value = normalize(DocumentType::CanadianSin, raw);
    if !SIN_SHAPE.is_match(&value) {
        return ValidationOutcome::invalid(ErrorKind::Format, "Invalid SIN format");
    }

    if TEST_SINS.contains(&value.as_str()) {
        return ValidationOutcome::Valid;
    }

    let Some(digits) = checksum::digit_values(&value) else {
        return ValidationOutcome::invalid(ErrorKind::Format, "Invalid SIN format");
    };
    if checksum::luhn_mod10(&digits) {
        ValidationOutcome::Valid
    } else {
        ValidationOutcome::invalid(ErrorKind::Checksum, "Invalid SIN number")
    }
}
