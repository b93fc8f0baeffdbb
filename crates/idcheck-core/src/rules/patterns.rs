//! Surface grammars for the supported document types.
//!
//! Each pattern matches the whole value after normalization. Rules the
//! regex engine cannot carry (prefix blocklists, area-number exclusions,
//! mixed-alphabet constraints) live as predicates next to the validators,
//! so every exclusion is individually testable.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Brazil
    pub static ref CPF_SHAPE: Regex = Regex::new(r"^\d{11}$").unwrap();

    // Formatted (dots and dash optional, check digit may be X) or bare 9 digits.
    pub static ref RG_SHAPE: Regex = Regex::new(
        r"^(?:\d{2}\.?\d{3}\.?\d{3}-?[0-9Xx]|\d{9})$"
    ).unwrap();

    pub static ref SUS_SHAPE: Regex = Regex::new(r"^\d{15}$").unwrap();

    pub static ref CNH_SHAPE: Regex = Regex::new(r"^\d{11}$").unwrap();

    // 7-8 digit document number, optional separator, two check digits.
    pub static ref CTPS_SHAPE: Regex = Regex::new(
        r"^[0-9]{7,8}(?:[-\s]?[0-9]{2})$"
    ).unwrap();

    // CRM/OAB/CREA share the registration grammar: digits, slash, state code.
    pub static ref PROFESSIONAL_SHAPE: Regex = Regex::new(r"^\d{4,6}/[A-Z]{2}$").unwrap();

    pub static ref PIS_SHAPE: Regex = Regex::new(r"^\d{11}$").unwrap();

    pub static ref CNPJ_SHAPE: Regex = Regex::new(r"^\d{14}$").unwrap();

    // United States
    pub static ref US_DRIVERS_LICENSE_SHAPE: Regex = Regex::new(r"^[A-Z0-9]{4,16}$").unwrap();

    // Area/group/serial exclusions are checked separately.
    pub static ref US_SSN_SHAPE: Regex = Regex::new(r"^\d{3}-\d{2}-\d{4}$").unwrap();

    pub static ref US_MILITARY_ID_SHAPE: Regex = Regex::new(r"^[A-Z0-9]{10,12}$").unwrap();

    pub static ref US_GREEN_CARD_SHAPE: Regex = Regex::new(
        r"^(?:[A-Z]{3}\d{10}|[A-Z]\d{8,9})$"
    ).unwrap();

    pub static ref US_EAD_SHAPE: Regex = Regex::new(r"^[A-Z]{3}\d{10}$").unwrap();

    pub static ref US_BIRTH_CERTIFICATE_SHAPE: Regex = Regex::new(r"^[A-Z]{2}\d{6,8}$").unwrap();

    // MBI: C A N - A N N N - A N N with letters excluding I, L, O, S.
    pub static ref US_MEDICARE_SHAPE: Regex = Regex::new(
        r"^[1-9][A-HJ-KM-NP-RT-Z]\d{2}-[A-HJ-KM-NP-RT-Z]\d{3}-[A-HJ-KM-NP-RT-Z]\d{2}$"
    ).unwrap();

    pub static ref US_VETERAN_ID_SHAPE: Regex = Regex::new(r"^[A-Z0-9]{8,12}$").unwrap();

    // United Kingdom
    pub static ref UK_DRIVING_LICENCE_SHAPE: Regex = Regex::new(
        r"^[A-Z]{5}\d{6}[A-Z]{2}\d{2}$"
    ).unwrap();

    pub static ref UK_BIRTH_CERTIFICATE_SHAPE: Regex = Regex::new(r"^[A-Z]{2}\d{6,8}$").unwrap();

    pub static ref UK_ARMED_FORCES_SHAPE: Regex = Regex::new(r"^[A-Z]{2}\d{6}$").unwrap();

    // Prefix blocklist lives in `united_kingdom::BLOCKED_NI_PREFIXES`.
    pub static ref UK_NI_SHAPE: Regex = Regex::new(r"^[A-Z]{2}\d{6}[ABCD]$").unwrap();

    pub static ref UK_RESIDENCE_CARD_SHAPE: Regex = Regex::new(r"^[A-Z0-9]{12}$").unwrap();

    // Canada
    pub static ref SIN_SHAPE: Regex = Regex::new(r"^\d{9}$").unwrap();

    // Mexico
    pub static ref CURP_SHAPE: Regex = Regex::new(
        r"^[A-ZÑ]{4}\d{6}[HM][A-ZÑ]{5}[0-9A-ZÑ]\d$"
    ).unwrap();

    // South Korea
    pub static ref RRN_SHAPE: Regex = Regex::new(r"^\d{13}$").unwrap();

    // Germany
    pub static ref PERSONALAUSWEIS_SHAPE: Regex = Regex::new(r"^\d{10}$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rg_shape_variants() {
        assert!(RG_SHAPE.is_match("12.345.678-9"));
        assert!(RG_SHAPE.is_match("12345678-X"));
        assert!(RG_SHAPE.is_match("12345678x"));
        assert!(RG_SHAPE.is_match("123456789"));
        assert!(!RG_SHAPE.is_match("123-45.6789"));
        assert!(!RG_SHAPE.is_match("12345678"));
    }

    #[test]
    fn test_ctps_shape_separator_is_optional() {
        assert!(CTPS_SHAPE.is_match("1234567-21"));
        assert!(CTPS_SHAPE.is_match("1234567 21"));
        assert!(CTPS_SHAPE.is_match("123456721"));
        assert!(!CTPS_SHAPE.is_match("123456-21"));
    }

    #[test]
    fn test_medicare_shape_excludes_ambiguous_letters() {
        assert!(US_MEDICARE_SHAPE.is_match("1E23-G456-H78"));
        assert!(!US_MEDICARE_SHAPE.is_match("1I23-G456-H78"));
        assert!(!US_MEDICARE_SHAPE.is_match("1E23G456H78"));
        assert!(!US_MEDICARE_SHAPE.is_match("0E23-G456-H78"));
    }

    #[test]
    fn test_curp_shape_accepts_enye() {
        assert!(CURP_SHAPE.is_match("ÑOLE820115HDFLRN05"));
        assert!(!CURP_SHAPE.is_match("ñole820115hdflrn05"));
    }
}
