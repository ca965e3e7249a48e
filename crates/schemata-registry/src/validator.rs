//! # Validator Facade
//!
//! [`SchemaValidator`] owns a registry and a source, loads schemas through
//! [`SchemaLoader`], and validates documents by identifier.
//!
//! ## Security Invariant
//!
//! Validation against an identifier that was never loaded through this
//! validator fails with [`SchemaError::NotLoaded`]. It is never treated as a
//! vacuous pass, even when the engine happens to know the identifier.

use std::path::Path;
use std::sync::Arc;

use serde_json::Value;

use schemata_core::{SchemaError, SchemaId};

use crate::engine::{JsonSchemaEngine, KeywordFailure, ValidationEngine};
use crate::loader::SchemaLoader;
use crate::registry::SchemaRegistry;
use crate::report::ValidationReport;
use crate::source::{FsSource, SchemaSource};

/// Loads schemas from a location and validates data against them.
///
/// ## Thread Safety
///
/// All methods take `&self`. Loads append to the registry under short
/// write locks that are never held across an `.await`, so concurrent
/// loads and validations do not observe partial registrations.
#[derive(Debug)]
pub struct SchemaValidator<E = JsonSchemaEngine, S = FsSource> {
    registry: SchemaRegistry<E>,
    source: S,
}

impl SchemaValidator {
    /// A filesystem-backed validator with `format` checking enabled.
    pub fn new() -> Self {
        Self::with_parts(JsonSchemaEngine::new(), FsSource)
    }
}

impl Default for SchemaValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: ValidationEngine, S: SchemaSource> SchemaValidator<E, S> {
    /// Build a validator from an explicit engine and source.
    pub fn with_parts(engine: E, source: S) -> Self {
        Self {
            registry: SchemaRegistry::new(engine),
            source,
        }
    }

    /// The underlying registry.
    pub fn registry(&self) -> &SchemaRegistry<E> {
        &self.registry
    }

    /// A loader writing into this validator's registry.
    pub fn loader(&self) -> SchemaLoader<'_, E, S> {
        SchemaLoader::new(&self.registry, &self.source)
    }

    /// Load one schema file; its identifier is `path` relative to
    /// `relative_to`.
    pub async fn load_file(
        &self,
        path: impl AsRef<Path>,
        relative_to: Option<&Path>,
    ) -> Result<SchemaId, SchemaError> {
        self.loader().load_file(path.as_ref(), relative_to).await
    }

    /// Load every `*.json` file under `start_path`.
    pub async fn load_folder(&self, start_path: impl AsRef<Path>) -> Result<Vec<SchemaId>, SchemaError> {
        self.loader().load_folder(start_path.as_ref()).await
    }

    /// Validate `data` against the loaded schema `id`.
    ///
    /// Returns `Ok(None)` when the data is valid and `Ok(Some(report))`
    /// describing every violation otherwise. Dangling `$ref`s alone do not
    /// make data invalid; they are listed in the report when it fails.
    ///
    /// # Errors
    ///
    /// - [`SchemaError::NotLoaded`] if `id` was not loaded by this validator.
    /// - [`SchemaError::InvalidSchema`] if the schema cannot be compiled.
    pub fn validate(&self, data: &Value, id: &str) -> Result<Option<ValidationReport>, SchemaError> {
        if !self.registry.is_loaded(id) {
            return Err(SchemaError::NotLoaded { id: id.to_string() });
        }

        let report = self
            .registry
            .engine()
            .validate_result(data, &SchemaId::parse(id))?;

        if report.valid {
            Ok(None)
        } else {
            Ok(Some(report))
        }
    }

    /// Identifiers referenced via `$ref` but never registered, sorted.
    pub fn missing_schemas(&self) -> Vec<String> {
        self.registry.engine().missing_uris()
    }

    /// [`missing_schemas`](Self::missing_schemas) restricted to targets
    /// accepted by `filter`.
    pub fn missing_schemas_matching(&self, filter: impl Fn(&str) -> bool) -> Vec<String> {
        self.missing_schemas()
            .into_iter()
            .filter(|target| filter(target))
            .collect()
    }

    /// Whether `id` was loaded through this validator.
    pub fn is_loaded(&self, id: &str) -> bool {
        self.registry.is_loaded(id)
    }

    /// Every loaded identifier, sorted.
    pub fn loaded_ids(&self) -> Vec<SchemaId> {
        self.registry.loaded_ids()
    }

    /// Register a custom `format` check.
    pub fn add_format<F>(&self, name: &str, check: F)
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.registry.engine_mut().add_format(name, Arc::new(check));
    }

    /// Register a custom keyword. `check` receives the instance and the
    /// keyword's value from the schema.
    pub fn define_keyword<F>(&self, name: &str, check: F)
    where
        F: Fn(&Value, &Value) -> Result<(), KeywordFailure> + Send + Sync + 'static,
    {
        self.registry.engine_mut().define_keyword(name, Arc::new(check));
    }

    /// Register a named error code and message template for custom keywords.
    pub fn define_error(&self, name: &str, code: u32, template: &str) {
        self.registry.engine_mut().define_error(name, code, template);
    }

    /// Numeric code of an error registered with
    /// [`define_error`](Self::define_error).
    pub fn error_code(&self, name: &str) -> Option<u32> {
        self.registry.engine().error_code(name)
    }
}
