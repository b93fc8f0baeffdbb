//! United Kingdom document validation: DVLA driving licence, birth
//! certificate, Armed Forces ID, National Insurance number, and the
//! Biometric Residence Permit.

use crate::document::DocumentType;
use crate::error::ErrorKind;
use crate::normalize::normalize;
use crate::outcome::ValidationOutcome;

use super::patterns::{
    UK_ARMED_FORCES_SHAPE, UK_BIRTH_CERTIFICATE_SHAPE, UK_DRIVING_LICENCE_SHAPE, UK_NI_SHAPE,
    UK_RESIDENCE_CARD_SHAPE,
};

/// Two-letter prefixes never allocated to National Insurance numbers.
const BLOCKED_NI_PREFIXES: [&str; 7] = ["BG", "GB", "NK", "KN", "TN", "NT", "ZZ"];

/// Validate a DVLA driving licence number: five letters, six digits, two
/// letters, two digits.
pub fn validate_driving_licence(raw: &str) -> ValidationOutcome {
    let value = normalize(DocumentType::UkDrivingLicence, raw);
    if UK_DRIVING_LICENCE_SHAPE.is_match(&value) {
        ValidationOutcome::Valid
    } else {
        ValidationOutcome::invalid(ErrorKind::Format, "Invalid UK Driving Licence format")
    }
}

/// Validate a birth certificate number: two letters and 6-8 digits.
pub fn validate_birth_certificate(raw: &str) -> ValidationOutcome {
    let value = normalize(DocumentType::UkBirthCertificate, raw);
    if UK_BIRTH_CERTIFICATE_SHAPE.is_match(&value) {
        ValidationOutcome::Valid
    } else {
        ValidationOutcome::invalid(ErrorKind::Format, "Invalid UK Birth Certificate format")
    }
}

/// Validate an Armed Forces ID: two letters and six digits.
pub fn validate_armed_forces_id(raw: &str) -> ValidationOutcome {
    let value = normalize(DocumentType::UkArmedForcesId, raw);
    if UK_ARMED_FORCES_SHAPE.is_match(&value) {
        ValidationOutcome::Valid
    } else {
        ValidationOutcome::invalid(ErrorKind::Format, "Invalid UK Armed Forces ID format")
    }
}

/// Validate a National Insurance number: two letters, six digits, and a
/// suffix letter A-D, with the never-allocated prefixes rejected.
pub fn validate_ni_number(raw: &str) -> ValidationOutcome {
    let value = normalize(DocumentType::UkNiNumber, raw);
    if !UK_NI_SHAPE.is_match(&value) {
        return ValidationOutcome::invalid(ErrorKind::Format, "Invalid UK NI Number format");
    }
    if BLOCKED_NI_PREFIXES.contains(&&value[..2]) {
        return ValidationOutcome::invalid(ErrorKind::Format, "Invalid UK NI Number format");
    }
    ValidationOutcome::Valid
}

/// Validate a Biometric Residence Permit number: 12 uppercase alphanumeric
/// characters, and when letters and digits are mixed, `I` and `O` are
/// rejected as ambiguous with `1` and `0`.
pub fn validate_residence_card(raw: &str) -> ValidationOutcome {
    let value = normalize(DocumentType::UkResidenceCard, raw);
    if !UK_RESIDENCE_CARD_SHAPE.is_match(&value) {
        return ValidationOutcome::invalid(
            ErrorKind::Format,
            "Invalid UK Residence Card format (must be 12 uppercase alphanumeric characters)",
        );
    }

    let has_letters = value.chars().any(|c| c.is_ascii_uppercase());
    let has_digits = value.chars().any(|c| c.is_ascii_digit());
    if has_letters && has_digits && value.chars().any(|c| c == 'I' || c == 'O') {
        return ValidationOutcome::invalid(
            ErrorKind::Format,
            "UK Residence Card cannot contain 'I' or 'O' when mixed with numbers (ambiguous with 1 and 0)",
        );
    }

    ValidationOutcome::Valid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_driving_licence() {
        assert_eq!(
            validate_driving_licence("SMITH654321AB12"),
            ValidationOutcome::Valid
        );
        assert!(!validate_driving_licence("SMITH654321AB1").is_valid());
        assert!(!validate_driving_licence("smith654321ab12").is_valid());
    }

    #[test]
    fn test_birth_certificate() {
        assert_eq!(validate_birth_certificate("AB123456"), ValidationOutcome::Valid);
        assert!(!validate_birth_certificate("AB12345").is_valid());
    }

    #[test]
    fn test_armed_forces_id() {
        assert_eq!(validate_armed_forces_id("AB123456"), ValidationOutcome::Valid);
        assert!(!validate_armed_forces_id("AB1234567").is_valid());
        assert!(!validate_armed_forces_id("A123456").is_valid());
    }

    #[test]
    fn test_ni_number_valid() {
        assert_eq!(validate_ni_number("AB123456C"), ValidationOutcome::Valid);
    }

    #[test]
    fn test_ni_number_blocked_prefixes() {
        for prefix in BLOCKED_NI_PREFIXES {
            let value = format!("{prefix}123456A");
            assert_eq!(
                validate_ni_number(&value),
                ValidationOutcome::invalid(ErrorKind::Format, "Invalid UK NI Number format"),
                "expected prefix {prefix} to be rejected"
            );
        }
    }

    #[test]
    fn test_ni_number_suffix_letter() {
        assert!(!validate_ni_number("AB123456E").is_valid());
        assert!(!validate_ni_number("AB123456").is_valid());
    }

    #[test]
    fn test_residence_card_accepts_unambiguous_mixes() {
        assert_eq!(validate_residence_card("ZU1234567890"), ValidationOutcome::Valid);
        assert_eq!(validate_residence_card("123456789012"), ValidationOutcome::Valid);
        // All-letter values may carry I and O: nothing to confuse them with.
        assert_eq!(validate_residence_card("ABCDEFGHIJKL"), ValidationOutcome::Valid);
    }

    #[test]
    fn test_residence_card_rejects_ambiguous_mix() {
        let outcome = validate_residence_card("RU123456789I");
        assert_eq!(outcome.error_kind(), Some(ErrorKind::Format));
        assert_eq!(
            outcome.message(),
            Some(
                "UK Residence Card cannot contain 'I' or 'O' when mixed with numbers (ambiguous with 1 and 0)"
            )
        );
    }

    #[test]
    fn test_residence_card_shape() {
        let outcome = validate_residence_card("AB12");
        assert_eq!(
            outcome.message(),
            Some("Invalid UK Residence Card format (must be 12 uppercase alphanumeric characters)")
        );
    }
}
