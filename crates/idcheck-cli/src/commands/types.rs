//! List the supported document types.

use std::process::ExitCode;

use clap::Args;
use idcheck_core::DocumentType;

#[derive(Args)]
pub struct TypesArgs {
    /// Emit the registry as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: TypesArgs) -> anyhow::Result<ExitCode> {
    if args.json {
        let entries: Vec<_> = DocumentType::ALL
            .iter()
            .map(|doc| {
                serde_json::json!({
                    "tag": doc.tag(),
                    "name": doc.display_name(),
                    "country": doc.country().to_string(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(ExitCode::SUCCESS);
    }

    // The registry table is already grouped by country.
    let mut last_country = None;
    for doc in DocumentType::ALL {
        let country = doc.country();
        if last_country != Some(country) {
            println!("{country}:");
            last_country = Some(country);
        }
        println!("  {:<24} {}", doc.tag(), doc.display_name());
    }

    Ok(ExitCode::SUCCESS)
}
