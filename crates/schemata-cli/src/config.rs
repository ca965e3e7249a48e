//! # Registry Configuration
//!
//! Settings shared by every subcommand. Values are layered: built-in
//! defaults, then an optional YAML file (`--config`), then environment
//! variables, then command-line flags.
//!
//! ## Environment
//!
//! - `SCHEMATA_SCHEMA_DIR` overrides `schema_dir`.
//! - `SCHEMATA_VALIDATE_FORMATS` set to `"false"` (any case) disables
//!   `format` checking. Any other value leaves it enabled.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use schemata_registry::{FsSource, JsonSchemaEngine, SchemaValidator};

/// Environment variable overriding [`RegistryConfig::schema_dir`].
pub const ENV_SCHEMA_DIR: &str = "SCHEMATA_SCHEMA_DIR";

/// Environment variable overriding [`RegistryConfig::validate_formats`].
pub const ENV_VALIDATE_FORMATS: &str = "SCHEMATA_VALIDATE_FORMATS";

/// Configuration could not be loaded.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("cannot read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid YAML for [`RegistryConfig`].
    #[error("invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Where schemas live and how they are checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
    /// Directory loaded with `load_folder`.
    pub schema_dir: PathBuf,
    /// Whether `format` keywords are enforced.
    pub validate_formats: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            schema_dir: PathBuf::from("schemas"),
            validate_formats: true,
        }
    }
}

impl RegistryConfig {
    /// Read a YAML config file. Fields it omits keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Defaults, overlaid with `path` when given, overlaid with the process
    /// environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(config.with_env(|name| std::env::var(name).ok()))
    }

    /// Apply environment overrides read through `lookup`.
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(dir) = lookup(ENV_SCHEMA_DIR).filter(|dir| !dir.is_empty()) {
            self.schema_dir = PathBuf::from(dir);
        }
        if let Some(flag) = lookup(ENV_VALIDATE_FORMATS) {
            self.validate_formats = flag.to_lowercase() != "false";
        }
        self
    }

    /// Apply a `--schema-dir` flag, which wins over every other source.
    pub fn with_schema_dir(mut self, dir: Option<&Path>) -> Self {
        if let Some(dir) = dir {
            self.schema_dir = dir.to_path_buf();
        }
        self
    }

    /// A filesystem validator configured from these settings. Nothing is
    /// loaded yet.
    pub fn validator(&self) -> SchemaValidator {
        let engine = JsonSchemaEngine::new().with_format_validation(self.validate_formats);
        SchemaValidator::with_parts(engine, FsSource)
    }
}
