//! South Korean Resident Registration Number validation: 13 digits with
//! an embedded birth date, a gender/century digit, and a weighted mod-11
//! check digit folded into the 0-9 range.

use chrono::NaiveDate;

use crate::checksum;
use crate::document::DocumentType;
use crate::error::ErrorKind;
use crate::normalize::normalize;
use crate::outcome::ValidationOutcome;

use super::patterns::RRN_SHAPE;

/// Weights for the first 12 digits.
const RRN_WEIGHTS: [u32; 12] = [2, 3, 4, 5, 6, 7, 8, 9, 2, 3, 4, 5];

/// Validate an RRN.
///
/// The 7th digit selects gender and century: 1-2 for births in the 1900s,
/// 3-4 for the 2000s. The leading YYMMDD must be calendar-valid in the
/// selected century, leap years included. The check digit is
/// `(11 - sum % 11) % 10` over the first 12 digits.
pub fn validate_rrn(raw: &str) -> ValidationOutcome {
    let value = normalize(DocumentType::SouthKoreanRrn, raw);
    if !RRN_SHAPE.is_match(&value) {
        return ValidationOutcome::invalid(ErrorKind::Format, "Invalid RRN format");
    }
    let Some(digits) = checksum::digit_values(&value) else {
        return ValidationOutcome::invalid(ErrorKind::Format, "Invalid RRN format");
    };

    let gender = digits[6];
    if !(1..=4).contains(&gender) {
        return ValidationOutcome::invalid(ErrorKind::Format, "Invalid gender digit in RRN");
    }

    let year = digits[0] * 10 + digits[1];
    let month = digits[2] * 10 + digits[3];
    let day = digits[4] * 10 + digits[5];
    let full_year = if gender <= 2 { 1900 + year } else { 2000 + year };

    if NaiveDate::from_ymd_opt(full_year as i32, month, day).is_none() {
        return ValidationOutcome::invalid(ErrorKind::Format, "Invalid birthdate in RRN");
    }

    let sum = checksum::weighted_sum(&digits[..12], &RRN_WEIGHTS);
    let check = (11 - sum % 11) % 10;
    if check != digits[12] {
        return ValidationOutcome::invalid(ErrorKind::Checksum, "Invalid RRN number");
    }

    ValidationOutcome::Valid
}
