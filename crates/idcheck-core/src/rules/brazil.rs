//! Brazilian document validation: CPF, RG, SUS, CNH, CTPS, PIS/PASEP,
//! CNPJ, and the professional registrations (CRM, OAB, CREA).

use crate::checksum;
use crate::document::DocumentType;
use crate::error::ErrorKind;
use crate::normalize::normalize;
use crate::outcome::ValidationOutcome;

use super::patterns::{
    CNH_SHAPE, CNPJ_SHAPE, CPF_SHAPE, CTPS_SHAPE, PIS_SHAPE, PROFESSIONAL_SHAPE, RG_SHAPE,
    SUS_SHAPE,
};

/// Weights for the first CPF check digit (over the 9 base digits).
const CPF_FIRST_WEIGHTS: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];
/// Weights for the second CPF check digit (over base digits plus DV1).
const CPF_SECOND_WEIGHTS: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

const RG_WEIGHTS: [u32; 8] = [9, 8, 7, 6, 5, 4, 3, 2];

const SUS_WEIGHTS: [u32; 15] = [15, 14, 13, 12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1];

const CNH_FIRST_WEIGHTS: [u32; 9] = [9, 8, 7, 6, 5, 4, 3, 2, 1];
const CNH_SECOND_WEIGHTS: [u32; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];

const PIS_WEIGHTS: [u32; 10] = [3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

const CNPJ_FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Validate a CPF: 11 digits, two weighted mod-11 check digits, with
/// uniform-digit strings rejected outright.
pub fn validate_cpf(raw: &str) -> ValidationOutcome {
    let value = normalize(DocumentType::Cpf, raw);
    if !CPF_SHAPE.is_match(&value) {
        return ValidationOutcome::invalid(ErrorKind::Format, "Invalid CPF format");
    }
    let Some(digits) = checksum::digit_values(&value) else {
        return ValidationOutcome::invalid(ErrorKind::Format, "Invalid CPF format");
    };

    // Strings like 11111111111 satisfy the arithmetic but are not issued.
    if checksum::uniform_digits(&digits) {
        return ValidationOutcome::invalid(ErrorKind::Checksum, "Invalid CPF checksum");
    }

    let first = checksum::mod11_low_to_zero(checksum::weighted_sum(&digits[..9], &CPF_FIRST_WEIGHTS));
    if first != digits[9] {
        return ValidationOutcome::invalid(ErrorKind::Checksum, "Invalid CPF checksum");
    }

    let second =
        checksum::mod11_low_to_zero(checksum::weighted_sum(&digits[..10], &CPF_SECOND_WEIGHTS));
    if second != digits[10] {
        return ValidationOutcome::invalid(ErrorKind::Checksum, "Invalid CPF checksum");
    }

    ValidationOutcome::Valid
}

/// Validate an RG: 8 digits plus one check character, where the computed
/// value 10 is written as `X` and 11 as `0`.
pub fn validate_rg(raw: &str) -> ValidationOutcome {
    let value = normalize(DocumentType::Rg, raw);
    if !RG_SHAPE.is_match(&value) {
        return ValidationOutcome::invalid(ErrorKind::Format, "Invalid RG format");
    }

    // The matcher has verified placement; consume the dots and dash and
    // fold a lowercase x up.
    let cleaned: String = value
        .chars()
        .filter(|c| *c != '.' && *c != '-')
        .collect::<String>()
        .to_uppercase();
    if cleaned.len() != 9 {
        return ValidationOutcome::invalid(ErrorKind::Format, "Invalid RG format");
    }

    let digits_part = &cleaned[..8];
    let check = cleaned.as_bytes()[8] as char;

    let Some(digits) = checksum::digit_values(digits_part) else {
        return ValidationOutcome::invalid(ErrorKind::Format, "Invalid RG format");
    };

    // All-zero and repeated-digit bases are rejected before the arithmetic.
    if checksum::uniform_digits(&digits) {
        return ValidationOutcome::invalid(ErrorKind::Checksum, "Invalid RG checksum");
    }

    let sum = checksum::weighted_sum(&digits, &RG_WEIGHTS);
    let computed = match 11 - sum % 11 {
        10 => 'X',
        11 => '0',
        d => (b'0' + d as u8) as char,
    };

    if computed != check {
        return ValidationOutcome::invalid(ErrorKind::Checksum, "Invalid RG checksum");
    }

    ValidationOutcome::Valid
}

/// Validate a SUS card number: 15 digits whose weighted sum (weights 15
/// down to 1) must be divisible by 11. No explicit check digit is
/// extracted.
pub fn validate_sus(raw: &str) -> ValidationOutcome {
    let value = normalize(DocumentType::Sus, raw);
    if !SUS_SHAPE.is_match(&value) {
        return ValidationOutcome::invalid(ErrorKind::Format, "Invalid SUS format");
    }
    let Some(digits) = checksum::digit_values(&value) else {
        return ValidationOutcome::invalid(ErrorKind::Format, "Invalid SUS format");
    };

    if checksum::weighted_sum(&digits, &SUS_WEIGHTS) % 11 == 0 {
        ValidationOutcome::Valid
    } else {
        ValidationOutcome::invalid(ErrorKind::Checksum, "Invalid SUS checksum")
    }
}

/// Validate a CNH: 11 digits with two independent check digits over the
/// same 9 base digits, one weighted descending and one ascending, each
/// with remainder 10 collapsing to 0.
pub fn validate_cnh(raw: &str) -> ValidationOutcome {
    let value = normalize(DocumentType::Cnh, raw);
    if !CNH_SHAPE.is_match(&value) {
        return ValidationOutcome::invalid(ErrorKind::Format, "Invalid CNH format");
    }
    let Some(digits) = checksum::digit_values(&value) else {
        return ValidationOutcome::invalid(ErrorKind::Format, "Invalid CNH format");
    };

    let dv1 = checksum::mod11_ten_to_zero(checksum::weighted_sum(&digits[..9], &CNH_FIRST_WEIGHTS));
    let dv2 =
        checksum::mod11_ten_to_zero(checksum::weighted_sum(&digits[..9], &CNH_SECOND_WEIGHTS));

    if dv1 == digits[9] && dv2 == digits[10] {
        ValidationOutcome::Valid
    } else {
        ValidationOutcome::invalid(ErrorKind::Checksum, "Invalid CNH checksum")
    }
}

/// Validate a CTPS number: a 7-8 digit document number followed by two
/// check digits, separator optional. DV1 is computed over the document
/// number with weights `len+1-i`; DV2 repeats the scheme over the document
/// number with DV1 appended.
pub fn validate_ctps(raw: &str) -> ValidationOutcome {
    let value = normalize(DocumentType::Ctps, raw);
    if !CTPS_SHAPE.is_match(&value) {
        return ValidationOutcome::invalid(ErrorKind::Format, "Invalid CTPS format");
    }

    let compact: String = value
        .chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .collect();
    let Some(digits) = checksum::digit_values(&compact) else {
        return ValidationOutcome::invalid(ErrorKind::Format, "Invalid CTPS format");
    };

    let main_len = digits.len() - 2;
    let main = &digits[..main_len];

    let sum1: u32 = main
        .iter()
        .enumerate()
        .map(|(i, d)| d * (main_len as u32 + 1 - i as u32))
        .sum();
    let dv1 = checksum::mod11_ten_to_zero(sum1);

    let mut with_dv1 = main.to_vec();
    with_dv1.push(dv1);
    let sum2: u32 = with_dv1
        .iter()
        .enumerate()
        .map(|(i, d)| d * (with_dv1.len() as u32 + 1 - i as u32))
        .sum();
    let dv2 = checksum::mod11_ten_to_zero(sum2);

    if digits[main_len] == dv1 && digits[main_len + 1] == dv2 {
        ValidationOutcome::Valid
    } else {
        ValidationOutcome::invalid(ErrorKind::Checksum, "Invalid CTPS checksum")
    }
}

/// Shared grammar for CRM, OAB, and CREA registrations: 4-6 digits, a
/// slash, and a two-letter state code. Format-only; no check digit.
fn validate_professional(raw: &str, doc: DocumentType) -> ValidationOutcome {
    let value = normalize(doc, raw);
    if PROFESSIONAL_SHAPE.is_match(&value) {
        ValidationOutcome::Valid
    } else {
        ValidationOutcome::invalid(
            ErrorKind::Format,
            format!("Invalid {} format", doc.display_name()),
        )
    }
}

/// Validate a CRM (medical council) registration.
pub fn validate_crm(raw: &str) -> ValidationOutcome {
    validate_professional(raw, DocumentType::Crm)
}

/// Validate an OAB (bar association) registration.
pub fn validate_oab(raw: &str) -> ValidationOutcome {
    validate_professional(raw, DocumentType::Oab)
}

/// Validate a CREA (engineering council) registration.
pub fn validate_crea(raw: &str) -> ValidationOutcome {
    validate_professional(raw, DocumentType::Crea)
}

/// Validate a PIS/PASEP number: 11 digits, one weighted mod-11 check digit
/// with weights [3, 2, 9, 8, 7, 6, 5, 4, 3, 2].
pub fn validate_pis(raw: &str) -> ValidationOutcome {
    let value = normalize(DocumentType::Pis, raw);
    if !PIS_SHAPE.is_match(&value) {
        return ValidationOutcome::invalid(ErrorKind::Format, "Invalid PIS/PASEP format");
    }
    let Some(digits) = checksum::digit_values(&value) else {
        return ValidationOutcome::invalid(ErrorKind::Format, "Invalid PIS/PASEP format");
    };

    let check = checksum::mod11_low_to_zero(checksum::weighted_sum(&digits[..10], &PIS_WEIGHTS));
    if check == digits[10] {
        ValidationOutcome::Valid
    } else {
        ValidationOutcome::invalid(ErrorKind::Checksum, "Invalid PIS/PASEP number")
    }
}

/// Validate a CNPJ: 14 digits, two weighted mod-11 check digits, with
/// uniform-digit strings rejected even where the arithmetic holds.
pub fn validate_cnpj(raw: &str) -> ValidationOutcome {
    let value = normalize(DocumentType::Cnpj, raw);
    if !CNPJ_SHAPE.is_match(&value) {
        return ValidationOutcome::invalid(ErrorKind::Format, "Invalid CNPJ format");
    }
    let Some(digits) = checksum::digit_values(&value) else {
        return ValidationOutcome::invalid(ErrorKind::Format, "Invalid CNPJ format");
    };

    if checksum::uniform_digits(&digits) {
        return ValidationOutcome::invalid(ErrorKind::Checksum, "Invalid CNPJ number");
    }

    let first =
        checksum::mod11_low_to_zero(checksum::weighted_sum(&digits[..12], &CNPJ_FIRST_WEIGHTS));
    let second =
        checksum::mod11_low_to_zero(checksum::weighted_sum(&digits[..13], &CNPJ_SECOND_WEIGHTS));

    if first == digits[12] && second == digits[13] {
        ValidationOutcome::Valid
    } else {
        ValidationOutcome::invalid(ErrorKind::Checksum, "Invalid CNPJ number")
    }
}
