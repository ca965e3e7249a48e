//! # schemata CLI entry point
//!
//! Parses command-line arguments, resolves configuration, and dispatches to
//! subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use schemata_cli::config::RegistryConfig;
use schemata_cli::list::{run_list, ListArgs};
use schemata_cli::missing::{run_missing, MissingArgs};
use schemata_cli::validate::{run_validate, ValidateArgs};

/// Load a directory of JSON Schemas and validate documents against them.
///
/// Schemas are named by their path relative to the schema directory, so
/// `schemas/folder/number.json` is `/folder/number.json`.
#[derive(Parser, Debug)]
#[command(name = "schemata", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a JSON or YAML document against a loaded schema.
    Validate(ValidateArgs),

    /// List `$ref` targets that no loaded schema provides.
    Missing(MissingArgs),

    /// List every loaded schema identifier.
    List(ListArgs),
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

    let config = match RegistryConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::from(1);
        }
    };

    tracing::debug!(
        schema_dir = %config.schema_dir.display(),
        validate_formats = config.validate_formats,
        "resolved configuration"
    );

    let result = match &cli.command {
        Commands::Validate(args) => run_validate(args, &config).await,
        Commands::Missing(args) => run_missing(args, &config).await,
        Commands::List(args) => run_list(args, &config).await,
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
