//! # Schema Loader
//!
//! Reads schema files, derives their identifiers from their paths, and
//! registers them.
//!
//! ## Failure Policy
//!
//! - An unreadable file and a file that is not JSON are reported the same
//!   way: `Unable to parse file: <path>`.
//! - A document whose `id` disagrees with its path-derived identifier is
//!   rejected and nothing is registered for it.
//! - A folder load runs every file concurrently and fails with the first
//!   error. Files that finished before the failure stay registered.

use std::path::Path;

use futures::future::try_join_all;
use serde_json::Value;

use schemata_core::{resolve, ParseCause, SchemaError, SchemaId};

use crate::engine::ValidationEngine;
use crate::registry::SchemaRegistry;
use crate::source::SchemaSource;

/// Loads schema files from a [`SchemaSource`] into a [`SchemaRegistry`].
#[derive(Debug)]
pub struct SchemaLoader<'a, E, S> {
    registry: &'a SchemaRegistry<E>,
    source: &'a S,
}

impl<'a, E: ValidationEngine, S: SchemaSource> SchemaLoader<'a, E, S> {
    /// Create a loader writing into `registry`.
    pub fn new(registry: &'a SchemaRegistry<E>, source: &'a S) -> Self {
        Self { registry, source }
    }

    /// Load one schema file.
    ///
    /// The identifier is `path` with `base_path` stripped (see
    /// [`schemata_core::resolve`]). Any `id` the document declares must equal
    /// it; the stored document always carries it.
    ///
    /// # Errors
    ///
    /// - [`SchemaError::Parse`] if the file cannot be read or parsed.
    /// - [`SchemaError::IdentityMismatch`] if the declared `id` differs.
    /// - [`SchemaError::InvalidSchema`] if the document is not a JSON object.
    /// - [`SchemaError::Conflict`] if different content is already loaded
    ///   under the same identifier.
    pub async fn load_file(&self, path: &Path, base_path: Option<&Path>) -> Result<SchemaId, SchemaError> {
        let parse_error = |cause: ParseCause| SchemaError::Parse {
            path: path.to_path_buf(),
            cause,
        };

        let bytes = self
            .source
            .read(path)
            .await
            .map_err(|e| parse_error(e.into()))?;
        let mut document: Value =
            serde_json::from_slice(&bytes).map_err(|e| parse_error(e.into()))?;

        let id = resolve(path, base_path);

        let Value::Object(map) = &mut document else {
            return Err(SchemaError::InvalidSchema {
                id,
                reason: "schema document must be a JSON object".to_string(),
            });
        };

        let declared = map
            .get("id")
            .map(|v| v.as_str().map(str::to_string).unwrap_or_else(|| v.to_string()));
        match declared {
            Some(declared) if declared != id.as_str() => {
                return Err(SchemaError::IdentityMismatch {
                    path: path.to_path_buf(),
                    expected: id,
                    declared,
                });
            }
            Some(_) => {}
            None => {
                map.insert("id".to_string(), Value::String(id.as_str().to_string()));
            }
        }

        self.registry.register(id.clone(), document, path)?;
        tracing::debug!(id = %id, path = %path.display(), "loaded schema");
        Ok(id)
    }

    /// Load every `*.json` file under `start_path`, using `start_path` as the
    /// base for identifier derivation.
    ///
    /// Returns the identifiers in discovery order.
    ///
    /// # Errors
    ///
    /// [`SchemaError::Discovery`] if `start_path` is missing or is not a
    /// directory, or the first error any individual file load produced.
    pub async fn load_folder(&self, start_path: &Path) -> Result<Vec<SchemaId>, SchemaError> {
        let files = self
            .source
            .discover(start_path)
            .await
            .map_err(|source| SchemaError::Discovery {
                path: start_path.to_path_buf(),
                source,
            })?;

        let ids = try_join_all(
            files
                .iter()
                .map(|file| self.load_file(file, Some(start_path))),
        )
        .await
        .map_err(|e| {
            tracing::warn!(
                folder = %start_path.display(),
                file = ?e.path(),
                "schema folder load aborted: {e}"
            );
            e
        })?;

        tracing::info!(
            folder = %start_path.display(),
            count = ids.len(),
            "loaded schema folder"
        );
        Ok(ids)
    }
}
