//! # schemata-registry — Schema Loading & Validation
//!
//! Loads JSON Schema documents from a file or a directory tree, names each
//! one by its path, and validates data against them by name.
//!
//! ## Pipeline
//!
//! 1. [`SchemaSource`] reads bytes and discovers `*.json` files.
//! 2. [`SchemaLoader`] parses each file, derives its identifier with
//!    [`schemata_core::resolve`], checks any declared `id`, and registers it.
//! 3. [`SchemaRegistry`] holds the engine cache and the set of identifiers
//!    loaded through the pipeline.
//! 4. [`SchemaValidator`] refuses identifiers outside that set and otherwise
//!    delegates to the [`ValidationEngine`].
//!
//! ## Example
//!
//! ```no_run
//! use schemata_registry::SchemaValidator;
//! use serde_json::json;
//!
//! # async fn run() -> Result<(), schemata_core::SchemaError> {
//! let validator = SchemaValidator::new();
//! validator.load_folder("schemas").await?;
//! match validator.validate(&json!("someone@example.net"), "/email.json")? {
//!     None => println!("valid"),
//!     Some(report) => println!("invalid:\n{report}"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Policy
//!
//! - Depends only on `schemata-core` internally.
//! - No registration is ever rolled back; the loaded set only grows.

pub mod document;
pub mod engine;
pub mod loader;
pub mod registry;
pub mod report;
pub mod source;
pub mod validator;

pub use document::{read_document, DocumentError};
pub use engine::{FormatCheck, JsonSchemaEngine, KeywordCheck, KeywordFailure, ValidationEngine};
pub use loader::SchemaLoader;
pub use registry::SchemaRegistry;
pub use report::{ValidationReport, Violation};
pub use source::{FsSource, MemorySource, SchemaSource};
pub use validator::SchemaValidator;
