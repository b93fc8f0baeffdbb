//! Dispatch from document type to validation rule.
//!
//! One exhaustive match covers the whole registry, so adding a
//! [`DocumentType`] variant without a handler is a compile error rather
//! than a runtime surprise.

use std::str::FromStr;

use crate::document::DocumentType;
use crate::error::ErrorKind;
use crate::outcome::ValidationOutcome;
use crate::rules::{
    brazil, canada, germany, mexico, south_korea, united_kingdom, united_states,
};

/// Validate `raw` against the scheme of `doc`.
///
/// Runs normalize, structural match, and checksum in strict sequence,
/// short-circuiting on the first failure. Pure and deterministic: equal
/// inputs always produce equal outcomes.
pub fn validate(doc: DocumentType, raw: &str) -> ValidationOutcome {
    match doc {
        DocumentType::Cpf => brazil::validate_cpf(raw),
        DocumentType::Rg => brazil::validate_rg(raw),
        DocumentType::Sus => brazil::validate_sus(raw),
        DocumentType::Cnh => brazil::validate_cnh(raw),
        DocumentType::Ctps => brazil::validate_ctps(raw),
        DocumentType::Crm => brazil::validate_crm(raw),
        DocumentType::Oab => brazil::validate_oab(raw),
        DocumentType::Crea => brazil::validate_crea(raw),
        DocumentType::Pis => brazil::validate_pis(raw),
        DocumentType::Cnpj => brazil::validate_cnpj(raw),
        DocumentType::UsDriversLicense => united_states::validate_drivers_license(raw),
        DocumentType::UsSsn => united_states::validate_ssn(raw),
        DocumentType::UsMilitaryId => united_states::validate_military_id(raw),
        DocumentType::UsGreenCard => united_states::validate_green_card(raw),
        DocumentType::UsEad => united_states::validate_ead(raw),
        DocumentType::UsBirthCertificate => united_states::validate_birth_certificate(raw),
        DocumentType::UsMedicare => united_states::validate_medicare(raw),
        DocumentType::UsVeteranId => united_states::validate_veteran_id(raw),
        DocumentType::UkDrivingLicence => united_kingdom::validate_driving_licence(raw),
        DocumentType::UkBirthCertificate => united_kingdom::validate_birth_certificate(raw),
        DocumentType::UkArmedForcesId => united_kingdom::validate_armed_forces_id(raw),
        DocumentType::UkNiNumber => united_kingdom::validate_ni_number(raw),
        DocumentType::UkResidenceCard => united_kingdom::validate_residence_card(raw),
        DocumentType::CanadianSin => canada::validate_sin(raw),
        DocumentType::MexicanCurp => mexico::validate_curp(raw),
        DocumentType::SouthKoreanRrn => south_korea::validate_rrn(raw),
        DocumentType::GermanPersonalausweis => germany::validate_personalausweis(raw),
    }
}

/// Validate against a document type named by its wire tag.
///
/// An unknown tag is a caller error, reported as
/// [`ErrorKind::UnsupportedType`] and kept distinct from the validation
/// failures a supported type can produce.
pub fn validate_tag(tag: &str, raw: &str) -> ValidationOutcome {
    match DocumentType::from_str(tag) {
        Ok(doc) => validate(doc, raw),
        Err(err) => ValidationOutcome::invalid(ErrorKind::UnsupportedType, err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_reaches_every_country_module() {
        assert!(validate(DocumentType::Cpf, "453.178.287-91").is_valid());
        assert!(validate(DocumentType::UsSsn, "123-45-6789").is_valid());
        assert!(validate(DocumentType::UkNiNumber, "AB123456C").is_valid());
        assert!(validate(DocumentType::CanadianSin, "046454286").is_valid());
        assert!(validate(DocumentType::MexicanCurp, "BADD110313HDFJLL02").is_valid());
        assert!(validate(DocumentType::SouthKoreanRrn, "9001011223349").is_valid());
        assert!(validate(DocumentType::GermanPersonalausweis, "0110000005").is_valid());
    }

    #[test]
    fn test_validation_is_deterministic() {
        for (doc, value) in [
            (DocumentType::Cpf, "00000000000"),
            (DocumentType::Rg, "12.345.678-0"),
            (DocumentType::MexicanCurp, "GOMC950102HDFLRN03"),
        ] {
            assert_eq!(validate(doc, value), validate(doc, value));
        }
    }

    #[test]
    fn test_structural_failure_wins_over_checksum() {
        // Too short for the grammar; the arithmetic never runs.
        let outcome = validate(DocumentType::Cpf, "123");
        assert_eq!(outcome.error_kind(), Some(ErrorKind::Format));
    }

    #[test]
    fn test_validate_tag_known() {
        assert!(validate_tag("cpf", "453.178.287-91").is_valid());
        assert!(validate_tag("south-korean-rrn", "9001011223349").is_valid());
    }

    #[test]
    fn test_validate_tag_unknown_is_unsupported_not_invalid() {
        let outcome = validate_tag("passport", "X1234567");
        assert_eq!(outcome.error_kind(), Some(ErrorKind::UnsupportedType));
        assert_eq!(outcome.message(), Some("unknown document type: passport"));
    }

    #[test]
    fn test_every_variant_has_a_runtime_handler() {
        // Garbage input must come back as a structured outcome, never a
        // panic, for every registered type.
        for doc in DocumentType::ALL {
            let outcome = validate(doc, "!!definitely-not-a-document!!");
            assert!(!outcome.is_valid(), "{doc} accepted garbage");
        }
    }
}
