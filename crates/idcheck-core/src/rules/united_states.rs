//! United States document validation. These schemes are structural: no
//! federal check digit exists for any of them, so the grammar is the whole
//! rule. The SSN area/group/serial exclusions are explicit predicates
//! rather than regex lookaheads.

use crate::document::DocumentType;
use crate::error::ErrorKind;
use crate::normalize::normalize;
use crate::outcome::ValidationOutcome;

use super::patterns::{
    US_BIRTH_CERTIFICATE_SHAPE, US_DRIVERS_LICENSE_SHAPE, US_EAD_SHAPE, US_GREEN_CARD_SHAPE,
    US_MEDICARE_SHAPE, US_MILITARY_ID_SHAPE, US_SSN_SHAPE, US_VETERAN_ID_SHAPE,
};

/// Validate a driver's license: 4-16 alphanumeric characters,
/// case-insensitive. State-specific grammars are out of scope.
pub fn validate_drivers_license(raw: &str) -> ValidationOutcome {
    let value = normalize(DocumentType::UsDriversLicense, raw);
    if US_DRIVERS_LICENSE_SHAPE.is_match(&value) {
        ValidationOutcome::Valid
    } else {
        ValidationOutcome::invalid(ErrorKind::Format, "Invalid US Driver's License format")
    }
}

/// Validate an SSN in AAA-GG-SSSS form.
///
/// Never-issued ranges are rejected: areas 000, 666, and 900-999, group
/// 00, serial 0000.
pub fn validate_ssn(raw: &str) -> ValidationOutcome {
    let value = normalize(DocumentType::UsSsn, raw);
    if !US_SSN_SHAPE.is_match(&value) {
        return ValidationOutcome::invalid(ErrorKind::Format, "Invalid SSN format");
    }

    let area = &value[0..3];
    let group = &value[4..6];
    let serial = &value[7..11];

    let excluded = area == "000"
        || area == "666"
        || area.starts_with('9')
        || group == "00"
        || serial == "0000";
    if excluded {
        return ValidationOutcome::invalid(ErrorKind::Format, "Invalid SSN format");
    }

    ValidationOutcome::Valid
}

/// Validate a military ID (CAC): 10-12 alphanumeric characters,
/// case-insensitive.
pub fn validate_military_id(raw: &str) -> ValidationOutcome {
    let value = normalize(DocumentType::UsMilitaryId, raw);
    if US_MILITARY_ID_SHAPE.is_match(&value) {
        ValidationOutcome::Valid
    } else {
        ValidationOutcome::invalid(ErrorKind::Format, "Invalid US Military ID format")
    }
}

/// Validate a Permanent Resident Card number: either three letters and
/// ten digits, or one letter and 8-9 digits.
pub fn validate_green_card(raw: &str) -> ValidationOutcome {
    let value = normalize(DocumentType::UsGreenCard, raw);
    if US_GREEN_CARD_SHAPE.is_match(&value) {
        ValidationOutcome::Valid
    } else {
        ValidationOutcome::invalid(ErrorKind::Format, "Invalid Green Card format")
    }
}

/// Validate an EAD card number: three letters and ten digits.
pub fn validate_ead(raw: &str) -> ValidationOutcome {
    let value = normalize(DocumentType::UsEad, raw);
    if US_EAD_SHAPE.is_match(&value) {
        ValidationOutcome::Valid
    } else {
        ValidationOutcome::invalid(ErrorKind::Format, "Invalid EAD format")
    }
}

/// Validate a birth certificate number: two letters and 6-8 digits.
pub fn validate_birth_certificate(raw: &str) -> ValidationOutcome {
    let value = normalize(DocumentType::UsBirthCertificate, raw);
    if US_BIRTH_CERTIFICATE_SHAPE.is_match(&value) {
        ValidationOutcome::Valid
    } else {
        ValidationOutcome::invalid(ErrorKind::Format, "Invalid US Birth Certificate format")
    }
}

/// Validate a Medicare/Medicaid beneficiary identifier (MBI): the
/// 11-character C/A/N pattern with hyphens after positions 4 and 8 and
/// letters drawn from the alphabet without I, L, O, S.
pub fn validate_medicare(raw: &str) -> ValidationOutcome {
    let value = normalize(DocumentType::UsMedicare, raw);
    if US_MEDICARE_SHAPE.is_match(&value) {
        ValidationOutcome::Valid
    } else {
        ValidationOutcome::invalid(ErrorKind::Format, "Invalid Medicare/Medicaid format")
    }
}

/// Validate a Veteran ID Card number: 8-12 alphanumeric characters,
/// case-sensitive.
pub fn validate_veteran_id(raw: &str) -> ValidationOutcome {
    let value = normalize(DocumentType::UsVeteranId, raw);
    if US_VETERAN_ID_SHAPE.is_match(&value) {
        ValidationOutcome::Valid
    } else {
        ValidationOutcome::invalid(ErrorKind::Format, "Invalid Veteran ID format")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drivers_license_bounds_and_case_folding() {
        assert_eq!(validate_drivers_license("A123"), ValidationOutcome::Valid);
        assert_eq!(
            validate_drivers_license("ABCD1234EFGH5678"),
            ValidationOutcome::Valid
        );
        assert_eq!(validate_drivers_license("aBcD1234"), ValidationOutcome::Valid);
        assert!(!validate_drivers_license("A12").is_valid());
        assert!(!validate_drivers_license("ABCD1234EFGH56789").is_valid());
        assert!(!validate_drivers_license("A123-456").is_valid());
        assert!(!validate_drivers_license("A 123 456").is_valid());
        assert!(!validate_drivers_license("").is_valid());
    }

    #[test]
    fn test_ssn_valid() {
        assert_eq!(validate_ssn("123-45-6789"), ValidationOutcome::Valid);
    }

    #[test]
    fn test_ssn_requires_hyphens() {
        assert_eq!(
            validate_ssn("123456789"),
            ValidationOutcome::invalid(ErrorKind::Format, "Invalid SSN format")
        );
    }

    #[test]
    fn test_ssn_excluded_ranges() {
        for bad in [
            "000-45-6789",
            "666-45-6789",
            "900-45-6789",
            "999-45-6789",
            "123-00-6789",
            "123-45-0000",
        ] {
            assert_eq!(
                validate_ssn(bad),
                ValidationOutcome::invalid(ErrorKind::Format, "Invalid SSN format"),
                "expected {bad} to be rejected"
            );
        }
    }

    #[test]
    fn test_military_id() {
        assert_eq!(validate_military_id("ABCD123456"), ValidationOutcome::Valid);
        assert_eq!(validate_military_id("abcd123456"), ValidationOutcome::Valid);
        assert!(!validate_military_id("ABC123456").is_valid());
        assert!(!validate_military_id("ABCD123456789").is_valid());
    }

    #[test]
    fn test_green_card_both_forms() {
        assert_eq!(validate_green_card("ABC0123456789"), ValidationOutcome::Valid);
        assert_eq!(validate_green_card("A12345678"), ValidationOutcome::Valid);
        assert_eq!(validate_green_card("A123456789"), ValidationOutcome::Valid);
        // No case folding for this type.
        assert!(!validate_green_card("abc0123456789").is_valid());
        assert!(!validate_green_card("AB12345678").is_valid());
    }

    #[test]
    fn test_ead() {
        assert_eq!(validate_ead("SRC1234567890"), ValidationOutcome::Valid);
        assert!(!validate_ead("SRC123456789").is_valid());
        assert!(!validate_ead("S1234567890").is_valid());
    }

    #[test]
    fn test_birth_certificate() {
        assert_eq!(validate_birth_certificate("AB123456"), ValidationOutcome::Valid);
        assert_eq!(validate_birth_certificate("AB12345678"), ValidationOutcome::Valid);
        assert!(!validate_birth_certificate("AB12345").is_valid());
        assert!(!validate_birth_certificate("A1234567").is_valid());
    }

    #[test]
    fn test_medicare_mbi() {
        assert_eq!(validate_medicare("1E23-G456-H78"), ValidationOutcome::Valid);
        assert!(!validate_medicare("1I23-G456-H78").is_valid());
        assert!(!validate_medicare("1E23G456H78").is_valid());
        assert!(!validate_medicare("0E23-G456-H78").is_valid());
    }

    #[test]
    fn test_veteran_id_is_case_sensitive() {
        assert_eq!(validate_veteran_id("ABC12345"), ValidationOutcome::Valid);
        assert_eq!(validate_veteran_id("ABC123456789"), ValidationOutcome::Valid);
        assert!(!validate_veteran_id("abc12345").is_valid());
        assert!(!validate_veteran_id("ABC1234").is_valid());
    }
}
