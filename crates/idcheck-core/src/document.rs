//! The closed set of supported document types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Issuing country of a document type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Country {
    Brazil,
    UnitedStates,
    UnitedKingdom,
    Canada,
    Mexico,
    SouthKorea,
    Germany,
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Brazil => "Brazil",
            Self::UnitedStates => "United States",
            Self::UnitedKingdom => "United Kingdom",
            Self::Canada => "Canada",
            Self::Mexico => "Mexico",
            Self::SouthKorea => "South Korea",
            Self::Germany => "Germany",
        };
        f.write_str(name)
    }
}

/// A supported identity document numbering scheme.
///
/// The set is closed: every variant has a handler in the registry and the
/// compiler enforces that an added variant cannot reach runtime unhandled.
/// Wire tags are kebab-case (`"us-drivers-license"`, `"mexican-curp"`, ...)
/// and round-trip through [`FromStr`] / [`fmt::Display`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentType {
    /// Cadastro de Pessoas Físicas (Brazil).
    Cpf,
    /// Registro Geral (Brazil).
    Rg,
    /// Sistema Único de Saúde card (Brazil).
    Sus,
    /// Carteira Nacional de Habilitação (Brazil).
    Cnh,
    /// Carteira de Trabalho e Previdência Social (Brazil).
    Ctps,
    /// Conselho Regional de Medicina registration (Brazil).
    Crm,
    /// Ordem dos Advogados do Brasil registration (Brazil).
    Oab,
    /// Conselho Regional de Engenharia e Agronomia registration (Brazil).
    Crea,
    /// PIS/PASEP worker registration (Brazil).
    Pis,
    /// Cadastro Nacional da Pessoa Jurídica (Brazil).
    Cnpj,
    /// Driver's license (United States, state-generic shape).
    UsDriversLicense,
    /// Social Security Number (United States).
    UsSsn,
    /// Military ID / CAC (United States).
    UsMilitaryId,
    /// Permanent Resident Card (United States).
    UsGreenCard,
    /// Employment Authorization Document (United States).
    UsEad,
    /// Birth certificate (United States).
    UsBirthCertificate,
    /// Medicare/Medicaid beneficiary identifier, MBI shape (United States).
    UsMedicare,
    /// Veteran ID Card (United States).
    UsVeteranId,
    /// DVLA driving licence (United Kingdom).
    UkDrivingLicence,
    /// Birth certificate (United Kingdom).
    UkBirthCertificate,
    /// Armed Forces ID (United Kingdom).
    UkArmedForcesId,
    /// National Insurance number (United Kingdom).
    UkNiNumber,
    /// Biometric Residence Permit (United Kingdom).
    UkResidenceCard,
    /// Social Insurance Number (Canada).
    CanadianSin,
    /// Clave Única de Registro de Población (Mexico).
    MexicanCurp,
    /// Resident Registration Number (South Korea).
    SouthKoreanRrn,
    /// Personalausweis number (Germany).
    GermanPersonalausweis,
}

impl DocumentType {
    /// Every supported document type, in registry order.
    pub const ALL: [DocumentType; 27] = [
        Self::Cpf,
        Self::Rg,
        Self::Sus,
        Self::Cnh,
        Self::Ctps,
        Self::Crm,
        Self::Oab,
        Self::Crea,
        Self::Pis,
        Self::Cnpj,
        Self::UsDriversLicense,
        Self::UsSsn,
        Self::UsMilitaryId,
        Self::UsGreenCard,
        Self::UsEad,
        Self::UsBirthCertificate,
        Self::UsMedicare,
        Self::UsVeteranId,
        Self::UkDrivingLicence,
        Self::UkBirthCertificate,
        Self::UkArmedForcesId,
        Self::UkNiNumber,
        Self::UkResidenceCard,
        Self::CanadianSin,
        Self::MexicanCurp,
        Self::SouthKoreanRrn,
        Self::GermanPersonalausweis,
    ];

    /// Kebab-case wire tag, matching the serde representation.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Cpf => "cpf",
            Self::Rg => "rg",
            Self::Sus => "sus",
            Self::Cnh => "cnh",
            Self::Ctps => "ctps",
            Self::Crm => "crm",
            Self::Oab => "oab",
            Self::Crea => "crea",
            Self::Pis => "pis",
            Self::Cnpj => "cnpj",
            Self::UsDriversLicense => "us-drivers-license",
            Self::UsSsn => "us-ssn",
            Self::UsMilitaryId => "us-military-id",
            Self::UsGreenCard => "us-green-card",
            Self::UsEad => "us-ead",
            Self::UsBirthCertificate => "us-birth-certificate",
            Self::UsMedicare => "us-medicare",
            Self::UsVeteranId => "us-veteran-id",
            Self::UkDrivingLicence => "uk-driving-licence",
            Self::UkBirthCertificate => "uk-birth-certificate",
            Self::UkArmedForcesId => "uk-armed-forces-id",
            Self::UkNiNumber => "uk-ni-number",
            Self::UkResidenceCard => "uk-residence-card",
            Self::CanadianSin => "canadian-sin",
            Self::MexicanCurp => "mexican-curp",
            Self::SouthKoreanRrn => "south-korean-rrn",
            Self::GermanPersonalausweis => "german-personalausweis",
        }
    }

    /// Human-readable name as used in outcome and boundary messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Cpf => "CPF",
            Self::Rg => "RG",
            Self::Sus => "SUS",
            Self::Cnh => "CNH",
            Self::Ctps => "CTPS",
            Self::Crm => "CRM",
            Self::Oab => "OAB",
            Self::Crea => "CREA",
            Self::Pis => "PIS/PASEP",
            Self::Cnpj => "CNPJ",
            Self::UsDriversLicense => "US Driver's License",
            Self::UsSsn => "US SSN",
            Self::UsMilitaryId => "US Military ID",
            Self::UsGreenCard => "Green Card",
            Self::UsEad => "EAD",
            Self::UsBirthCertificate => "US Birth Certificate",
            Self::UsMedicare => "Medicare/Medicaid",
            Self::UsVeteranId => "Veteran ID",
            Self::UkDrivingLicence => "UK Driving Licence",
            Self::UkBirthCertificate => "UK Birth Certificate",
            Self::UkArmedForcesId => "UK Armed Forces ID",
            Self::UkNiNumber => "UK NI Number",
            Self::UkResidenceCard => "UK Residence Card",
            Self::CanadianSin => "Canadian SIN",
            Self::MexicanCurp => "Mexican CURP",
            Self::SouthKoreanRrn => "South Korean RRN",
            Self::GermanPersonalausweis => "German Personalausweis",
        }
    }

    /// Issuing country.
    pub fn country(&self) -> Country {
        match self {
            Self::Cpf
            | Self::Rg
            | Self::Sus
            | Self::Cnh
            | Self::Ctps
            | Self::Crm
            | Self::Oab
            | Self::Crea
            | Self::Pis
            | Self::Cnpj => Country::Brazil,
            Self::UsDriversLicense
            | Self::UsSsn
            | Self::UsMilitaryId
            | Self::UsGreenCard
            | Self::UsEad
            | Self::UsBirthCertificate
            | Self::UsMedicare
            | Self::UsVeteranId => Country::UnitedStates,
            Self::UkDrivingLicence
            | Self::UkBirthCertificate
            | Self::UkArmedForcesId
            | Self::UkNiNumber
            | Self::UkResidenceCard => Country::UnitedKingdom,
            Self::CanadianSin => Country::Canada,
            Self::MexicanCurp => Country::Mexico,
            Self::SouthKoreanRrn => Country::SouthKorea,
            Self::GermanPersonalausweis => Country::Germany,
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A wire tag that does not name any supported document type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown document type: {0}")]
pub struct UnknownDocumentType(pub String);

impl FromStr for DocumentType {
    type Err = UnknownDocumentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|doc| doc.tag() == s)
            .copied()
            .ok_or_else(|| UnknownDocumentType(s.to_string()))
    }
}
