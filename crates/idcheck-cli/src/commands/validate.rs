//! Validate a single document number.

use std::process::ExitCode;

use clap::Args;
use idcheck_core::{DocumentType, ErrorKind};
use tracing::debug;

use super::BoundaryResponse;

#[derive(Args)]
pub struct ValidateArgs {
    /// Document type tag (see `idcheck types`)
    pub doc_type: String,

    /// The value to validate, exactly as received
    pub value: String,

    /// Emit the outcome as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ValidateArgs) -> anyhow::Result<ExitCode> {
    // An absent value is the boundary's concern, not the engine's.
    if let Ok(doc) = args.doc_type.parse::<DocumentType>() {
        if args.value.trim().is_empty() {
            emit(&BoundaryResponse::missing(doc), args.json)?;
            return Ok(ExitCode::FAILURE);
        }
    }

    let outcome = idcheck_core::validate_tag(&args.doc_type, &args.value);
    debug!(doc_type = %args.doc_type, valid = outcome.is_valid(), "validated");

    emit(&BoundaryResponse::from_outcome(&outcome), args.json)?;

    Ok(match outcome.error_kind() {
        None => ExitCode::SUCCESS,
        Some(ErrorKind::UnsupportedType) => ExitCode::from(2),
        Some(_) => ExitCode::FAILURE,
    })
}

fn emit(response: &BoundaryResponse, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(response)?);
    } else if let Some(error) = &response.error {
        println!("{error}");
    } else {
        println!("valid");
    }
    Ok(())
}
