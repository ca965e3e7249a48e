//! # Validate Subcommand
//!
//! Validates one document against one loaded schema and prints the result
//! as pretty JSON.
//!
//! Exit codes: `0` when the document is valid, `2` when it is not. Load and
//! read failures surface as errors (exit `1` from `main`).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use schemata_registry::{read_document, ValidationReport};

use crate::config::RegistryConfig;
use crate::load_schemas;

/// Exit code for a document that failed validation.
pub const EXIT_INVALID: u8 = 2;

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Document to validate (JSON, or YAML by `.yaml`/`.yml` extension).
    pub document: PathBuf,

    /// Identifier of the schema to validate against (e.g. `/email.json`).
    #[arg(long)]
    pub schema: String,

    /// Directory of schemas to load. Overrides config and environment.
    #[arg(long)]
    pub schema_dir: Option<PathBuf>,
}

/// Execute the validate subcommand.
pub async fn run_validate(args: &ValidateArgs, config: &RegistryConfig) -> Result<u8> {
    let config = config.clone().with_schema_dir(args.schema_dir.as_deref());
    let validator = load_schemas(&config).await?;

    let document = read_document(&args.document).await?;
    let outcome = validator
        .validate(&document, &args.schema)
        .with_context(|| format!("cannot validate against {}", args.schema))?;

    let (report, code) = match outcome {
        None => (
            ValidationReport {
                valid: true,
                errors: Vec::new(),
                missing: Vec::new(),
            },
            0,
        ),
        Some(report) => {
            tracing::info!(
                document = %args.document.display(),
                schema = %args.schema,
                violations = report.errors.len(),
                "document failed validation"
            );
            (report, EXIT_INVALID)
        }
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(code)
}
