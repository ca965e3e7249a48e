//! # Missing Subcommand
//!
//! Prints each `$ref` target that no loaded schema provides, one per line.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::config::RegistryConfig;
use crate::load_schemas;

/// Arguments for the missing subcommand.
#[derive(Args, Debug)]
pub struct MissingArgs {
    /// Directory of schemas to load. Overrides config and environment.
    #[arg(long)]
    pub schema_dir: Option<PathBuf>,

    /// Only report targets starting with this prefix.
    #[arg(long)]
    pub prefix: Option<String>,
}

/// Execute the missing subcommand.
pub async fn run_missing(args: &MissingArgs, config: &RegistryConfig) -> Result<u8> {
    for target in collect_missing(args, config).await? {
        println!("{target}");
    }
    Ok(0)
}

async fn collect_missing(args: &MissingArgs, config: &RegistryConfig) -> Result<Vec<String>> {
    let config = config.clone().with_schema_dir(args.schema_dir.as_deref());
    let validator = load_schemas(&config).await?;

    let missing = match &args.prefix {
        Some(prefix) => validator.missing_schemas_matching(|target| target.starts_with(prefix.as_str())),
        None => validator.missing_schemas(),
    };
    if !missing.is_empty() {
        tracing::warn!(count = missing.len(), "schemas reference unloaded targets");
    }
    Ok(missing)
}
