//! # Schema Registry
//!
//! The only shared mutable state in the crate: the validation engine's
//! schema cache and the set of identifiers loaded through the loader.
//!
//! ## Invariant
//!
//! The loaded set only grows. An identifier enters it in the same critical
//! section that registers its document with the engine, so a reader never
//! sees an identifier as loaded before its schema is available.

use std::collections::HashSet;
use std::path::Path;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use serde_json::Value;

use schemata_core::{SchemaError, SchemaId};

use crate::engine::{JsonSchemaEngine, ValidationEngine};

/// Engine cache plus the loader's own record of what it registered.
///
/// Construct one per independent set of schemas; there is no process-wide
/// instance.
#[derive(Debug)]
pub struct SchemaRegistry<E = JsonSchemaEngine> {
    engine: RwLock<E>,
    loaded: RwLock<HashSet<SchemaId>>,
}

impl<E: ValidationEngine> SchemaRegistry<E> {
    /// Wrap an engine. The loaded set starts empty even if the engine
    /// already holds schemas.
    pub fn new(engine: E) -> Self {
        Self {
            engine: RwLock::new(engine),
            loaded: RwLock::new(HashSet::new()),
        }
    }

    /// Register `document` under `id` and mark it loaded.
    ///
    /// Re-registering identical content is a no-op. Registering different
    /// content under an identifier that was already loaded fails with
    /// [`SchemaError::Conflict`].
    pub fn register(&self, id: SchemaId, document: Value, path: &Path) -> Result<(), SchemaError> {
        let mut loaded = self.loaded.write();
        let mut engine = self.engine.write();

        if loaded.contains(&id) {
            if engine.schema(id.as_str()) == Some(&document) {
                return Ok(());
            }
            return Err(SchemaError::Conflict {
                id,
                path: path.to_path_buf(),
            });
        }

        engine.add_schema(&id, document);
        loaded.insert(id);
        Ok(())
    }

    /// Whether `id` was registered through [`register`](Self::register).
    pub fn is_loaded(&self, id: &str) -> bool {
        self.loaded.read().contains(id)
    }

    /// Every loaded identifier, sorted.
    pub fn loaded_ids(&self) -> Vec<SchemaId> {
        let mut ids: Vec<SchemaId> = self.loaded.read().iter().cloned().collect();
        ids.sort();
        ids
    }

    /// Shared access to the engine.
    pub fn engine(&self) -> RwLockReadGuard<'_, E> {
        self.engine.read()
    }

    /// Exclusive access to the engine, e.g. for extension registration.
    pub fn engine_mut(&self) -> RwLockWriteGuard<'_, E> {
        self.engine.write()
    }
}

impl Default for SchemaRegistry<JsonSchemaEngine> {
    fn default() -> Self {
        Self::new(JsonSchemaEngine::new())
    }
}
