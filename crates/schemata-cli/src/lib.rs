//! # schemata-cli — Command-Line Front End
//!
//! Provides the `schemata` binary on top of `schemata-registry`.
//!
//! ## Subcommands
//!
//! - `schemata validate`: Validate a JSON or YAML document against a loaded schema.
//! - `schemata missing`: List `$ref` targets no loaded schema provides.
//! - `schemata list`: List every loaded schema identifier.
//!
//! ```bash
//! schemata validate order.yaml --schema /order.json --schema-dir contracts
//! schemata missing --prefix /shared/
//! schemata -v list
//! ```
//!
//! Every subcommand loads the whole schema directory first, so a broken
//! schema anywhere in the tree fails the command.

pub mod config;
pub mod list;
pub mod missing;
pub mod validate;

use anyhow::{Context, Result};

use schemata_registry::SchemaValidator;

use crate::config::RegistryConfig;

/// Build a validator from `config` and load its schema directory.
pub async fn load_schemas(config: &RegistryConfig) -> Result<SchemaValidator> {
    let validator = config.validator();
    validator
        .load_folder(&config.schema_dir)
        .await
        .with_context(|| format!("failed to load schemas from {}", config.schema_dir.display()))?;
    Ok(validator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[tokio::test]
    async fn load_schemas_reads_configured_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.json"), br#"{"type": "string"}"#).unwrap();

        let config = RegistryConfig {
            schema_dir: dir.path().to_path_buf(),
            validate_formats: true,
        };
        let validator = load_schemas(&config).await.unwrap();
        assert!(validator.is_loaded("/a.json"));
    }

    #[tokio::test]
    async fn load_schemas_names_the_directory_on_failure() {
        let config = RegistryConfig {
            schema_dir: PathBuf::from("/definitely/not/a/schema/dir"),
            validate_formats: true,
        };
        let err = load_schemas(&config).await.unwrap_err();
        assert!(format!("{err:#}").contains("/definitely/not/a/schema/dir"));
    }
}
