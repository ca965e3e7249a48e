//! # List Subcommand
//!
//! Prints every loaded schema identifier, sorted, one per line.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::config::RegistryConfig;
use crate::load_schemas;

/// Arguments for the list subcommand.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Directory of schemas to load. Overrides config and environment.
    #[arg(long)]
    pub schema_dir: Option<PathBuf>,
}

/// Execute the list subcommand.
pub async fn run_list(args: &ListArgs, config: &RegistryConfig) -> Result<u8> {
    let config = config.clone().with_schema_dir(args.schema_dir.as_deref());
    let validator = load_schemas(&config).await?;

    let ids = validator.loaded_ids();
    for id in &ids {
        println!("{id}");
    }
    tracing::debug!(count = ids.len(), "listed schemas");
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lists_nested_schemas() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("folder")).unwrap();
        std::fs::write(dir.path().join("b.json"), b"{}").unwrap();
        std::fs::write(dir.path().join("folder").join("a.json"), b"{}").unwrap();

        let args = ListArgs {
            schema_dir: Some(dir.path().to_path_buf()),
        };
        assert_eq!(run_list(&args, &RegistryConfig::default()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn broken_schema_fails_the_listing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bad.json"), b"{ nope").unwrap();

        let args = ListArgs {
            schema_dir: Some(dir.path().to_path_buf()),
        };
        let err = run_list(&args, &RegistryConfig::default()).await.unwrap_err();
        assert!(format!("{err:#}").contains("Unable to parse file"));
    }
}
