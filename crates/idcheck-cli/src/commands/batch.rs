//! Validate a file of document numbers.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Args;
use idcheck_core::{DocumentType, validate};
use serde::Serialize;
use tracing::debug;

use super::BoundaryResponse;

#[derive(Args)]
pub struct BatchArgs {
    /// Document type tag applied to every line
    pub doc_type: String,

    /// Input file, one value per line; blank lines are skipped
    pub file: PathBuf,

    /// Emit one JSON object per line instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct BatchLine<'a> {
    value: &'a str,
    #[serde(flatten)]
    response: BoundaryResponse,
}

pub fn run(args: BatchArgs) -> anyhow::Result<ExitCode> {
    let doc: DocumentType = match args.doc_type.parse() {
        Ok(doc) => doc,
        Err(err) => {
            eprintln!("{err}");
            return Ok(ExitCode::from(2));
        }
    };

    let content = fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;

    let mut valid = 0usize;
    let mut invalid = 0usize;
    for line in content.lines() {
        if line.trim().is_empty() {
            continue;
        }

        let outcome = validate(doc, line);
        if outcome.is_valid() {
            valid += 1;
        } else {
            invalid += 1;
        }

        if args.json {
            let record = BatchLine {
                value: line,
                response: BoundaryResponse::from_outcome(&outcome),
            };
            println!("{}", serde_json::to_string(&record)?);
        } else {
            println!("{line}: {}", outcome.message().unwrap_or("valid"));
        }
    }

    debug!(valid, invalid, "batch finished");
    if !args.json {
        println!("{valid} valid, {invalid} invalid");
    }

    Ok(if invalid == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
