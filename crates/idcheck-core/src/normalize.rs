//! Per-type input canonicalization.
//!
//! Normalization is total: it never fails, it only rewrites. Input that
//! cannot be made canonical simply fails the structural stage afterwards.
//! Only punctuation that is cosmetic for a given type is stripped here;
//! punctuation that carries positional meaning (the RG dots and dash, the
//! CTPS separator, the professional-registration slash) is left in place
//! for the structural matcher to consume.

use crate::document::DocumentType;

/// Separators that formatted documents conventionally carry.
const IGNORABLE_SEPARATORS: [char; 4] = ['.', '-', '/', ' '];

/// Strip cosmetic separator characters anywhere in the value.
pub(crate) fn strip_separators(value: &str) -> String {
    value
        .chars()
        .filter(|c| !IGNORABLE_SEPARATORS.contains(c))
        .collect()
}

/// Canonicalize `raw` for the given document type.
///
/// Uppercasing applies only to types whose alphabet is case-insensitive by
/// convention; digit-only schemes pass through untouched. The function is
/// idempotent: normalizing an already-normalized value is a no-op.
pub fn normalize(doc: DocumentType, raw: &str) -> String {
    match doc {
        // Dots and dash in a formatted CPF are cosmetic.
        DocumentType::Cpf => strip_separators(raw),

        // RG punctuation is positional; only surrounding whitespace goes.
        DocumentType::Rg => raw.trim().to_string(),

        // Registration numbers keep their structural slash.
        DocumentType::Crm | DocumentType::Oab | DocumentType::Crea => raw.trim().to_string(),

        // Case-insensitive alphanumeric schemes.
        DocumentType::UsDriversLicense | DocumentType::UsMilitaryId => raw.to_uppercase(),

        // CURP is matched against its trimmed, uppercased form; the
        // structural stage additionally requires the input to already be
        // in that form.
        DocumentType::MexicanCurp => raw.trim().to_uppercase(),

        // Everything else is validated exactly as received.
        DocumentType::Sus
        | DocumentType::Cnh
        | DocumentType::Ctps
        | DocumentType::Pis
        | DocumentType::Cnpj
        | DocumentType::UsSsn
        | DocumentType::UsGreenCard
        | DocumentType::UsEad
        | DocumentType::UsBirthCertificate
        | DocumentType::UsMedicare
        | DocumentType::UsVeteranId
        | DocumentType::UkDrivingLicence
        | DocumentType::UkBirthCertificate
        | DocumentType::UkArmedForcesId
        | DocumentType::UkNiNumber
        | DocumentType::UkResidenceCard
        | DocumentType::CanadianSin
        | DocumentType::SouthKoreanRrn
        | DocumentType::GermanPersonalausweis => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpf_strips_cosmetic_separators() {
        assert_eq!(normalize(DocumentType::Cpf, "453.178.287-91"), "45317828791");
        assert_eq!(normalize(DocumentType::Cpf, "453 178 287 91"), "45317828791");
    }

    #[test]
    fn test_cpf_keeps_foreign_characters_for_the_matcher() {
        // Letters are not separators; the structural stage rejects them.
        assert_eq!(normalize(DocumentType::Cpf, "453a7828791"), "453a7828791");
    }

    #[test]
    fn test_rg_only_trims() {
        assert_eq!(normalize(DocumentType::Rg, " 12.345.678-9 "), "12.345.678-9");
    }

    #[test]
    fn test_license_uppercases() {
        assert_eq!(normalize(DocumentType::UsDriversLicense, "aBcD1234"), "ABCD1234");
        assert_eq!(normalize(DocumentType::UsMilitaryId, "abcd123456"), "ABCD123456");
    }

    #[test]
    fn test_digit_schemes_pass_through() {
        assert_eq!(normalize(DocumentType::Sus, "123.4567.8901.2348"), "123.4567.8901.2348");
        assert_eq!(normalize(DocumentType::Cnpj, "11.222.333/0001-81"), "11.222.333/0001-81");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for doc in DocumentType::ALL {
            let once = normalize(doc, " aB1.2-3/4 ");
            let twice = normalize(doc, &once);
            assert_eq!(once, twice, "normalize not idempotent for {doc}");
        }
    }
}
