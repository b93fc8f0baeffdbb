//! CLI for multi-country identity document validation.

mod commands;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{batch, types, validate};

/// Identity document validation - structural and check digit verification
#[derive(Parser)]
#[command(name = "idcheck")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a single document number
    Validate(validate::ValidateArgs),

    /// Validate a file of document numbers, one per line
    Batch(batch::BatchArgs),

    /// List supported document types
    Types(types::TypesArgs),
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Validate(args) => validate::run(args),
        Commands::Batch(args) => batch::run(args),
        Commands::Types(args) => types::run(args),
    }
}
