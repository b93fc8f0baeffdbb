//! German Personalausweis number validation: 10 digits, the first being
//! an issuer code excluded from the checksum, with 7-3-1 repeating
//! weights over the remaining nine.

use crate::checksum;
use crate::document::DocumentType;
use crate::error::ErrorKind;
use crate::normalize::normalize;
use crate::outcome::ValidationOutcome;

use super::patterns::PERSONALAUSWEIS_SHAPE;

/// 7-3-1 weights applied to digits 2 through 10.
const PERSONALAUSWEIS_WEIGHTS: [u32; 9] = [7, 3, 1, 7, 3, 1, 7, 3, 1];

/// Validate a Personalausweis number.
///
/// The weighted sum runs over digits 2-10 inclusive, so the final digit
/// contributes to its own check at weight 1; the sum modulo 10 must equal
/// that final digit.
pub fn validate_personalausweis(raw: &str) -> ValidationOutcome {
    let value = normalize(DocumentType::GermanPersonalausweis, raw);
    if !PERSONALAUSWEIS_SHAPE.is_match(&value) {
        return ValidationOutcome::invalid(
            ErrorKind::Format,
            "Invalid format: Must be exactly 10 digits",
        );
    }
    let Some(digits) = checksum::digit_values(&value) else {
        return ValidationOutcome::invalid(
            ErrorKind::Format,
            "Invalid format: Must be exactly 10 digits",
        );
    };

    let sum = checksum::weighted_sum(&digits[1..10], &PERSONALAUSWEIS_WEIGHTS);
    if sum % 10 == digits[9] {
        ValidationOutcome::Valid
    } else {
        ValidationOutcome::invalid(ErrorKind::Checksum, "Invalid checksum")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_personalausweis_valid() {
        // Digits 2-9 weigh to 10, so the trailing digit checks out.
        assert_eq!(validate_personalausweis("0110000005"), ValidationOutcome::Valid);
        // Issuer digit is excluded: changing it does not break the check.
        assert_eq!(validate_personalausweis("9110000005"), ValidationOutcome::Valid);
    }

    #[test]
    fn test_personalausweis_checksum_failure() {
        // Digits 2-9 weigh to 163; no trailing digit satisfies the check.
        assert_eq!(
            validate_personalausweis("1134567890"),
            ValidationOutcome::invalid(ErrorKind::Checksum, "Invalid checksum")
        );
    }

    #[test]
    fn test_personalausweis_format() {
        assert_eq!(
            validate_personalausweis("123456789"),
            ValidationOutcome::invalid(ErrorKind::Format, "Invalid format: Must be exactly 10 digits")
        );
        assert_eq!(
            validate_personalausweis("12345678901"),
            ValidationOutcome::invalid(ErrorKind::Format, "Invalid format: Must be exactly 10 digits")
        );
        assert_eq!(
            validate_personalausweis("12345678a0"),
            ValidationOutcome::invalid(ErrorKind::Format, "Invalid format: Must be exactly 10 digits")
        );
    }
}
