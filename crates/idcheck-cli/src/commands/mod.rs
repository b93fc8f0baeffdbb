//! CLI subcommands.

pub mod batch;
pub mod types;
pub mod validate;

use idcheck_core::{DocumentType, ValidationOutcome};
use serde::Serialize;

/// Boundary mapping of an engine outcome. The engine is status-agnostic;
/// the 200/400 translation and the "value is required" check belong here.
#[derive(Debug, Serialize)]
pub struct BoundaryResponse {
    pub valid: bool,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BoundaryResponse {
    pub fn from_outcome(outcome: &ValidationOutcome) -> Self {
        match outcome {
            ValidationOutcome::Valid => Self {
                valid: true,
                status: 200,
                error: None,
            },
            ValidationOutcome::Invalid { message, .. } => Self {
                valid: false,
                status: 400,
                error: Some(message.clone()),
            },
        }
    }

    pub fn missing(doc: DocumentType) -> Self {
        Self {
            valid: false,
            status: 400,
            error: Some(required_message(doc)),
        }
    }
}

/// Per-type phrasing for an absent value.
pub fn required_message(doc: DocumentType) -> String {
    match doc {
        DocumentType::UsSsn => "US SSN is required.".to_string(),
        DocumentType::MexicanCurp => "Mexican CURP Number is required.".to_string(),
        _ => format!("{} number is required.", doc.display_name()),
    }
}
