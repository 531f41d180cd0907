//! # locar CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use locar_cli::lookup::{run_cep, run_cnpj, LookupArgs};

/// Resolve Brazilian CEPs and CNPJs against public registry providers.
#[derive(Parser, Debug)]
#[command(name = "locar", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve a CEP (postal code) into an address.
    Cep(LookupArgs),

    /// Resolve a CNPJ (company tax ID) into registration data.
    Cnpj(LookupArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match locar_cli::client_from_env() {
        Ok(client) => match &cli.command {
            Commands::Cep(args) => run_cep(args, &client).await,
            Commands::Cnpj(args) => run_cnpj(args, &client).await,
        },
        Err(e) => Err(e),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
