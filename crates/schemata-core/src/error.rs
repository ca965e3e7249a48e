//! # Error Types — Structured Error Hierarchy
//!
//! All registry failures are variants of [`SchemaError`], derived with
//! `thiserror`. Each variant carries the path or identifier it concerns so
//! callers never need to inspect message text.
//!
//! ## Design
//!
//! - Read failures and JSON syntax failures share one reported category,
//!   [`SchemaError::Parse`]. The underlying cause is still available through
//!   `Error::source()`.
//! - A declared `id` that disagrees with the file location is an integrity
//!   failure, never silently overwritten.
//! - Validating against an identifier that was not loaded is an error, not a
//!   vacuous pass.

use std::path::PathBuf;

use thiserror::Error;

use crate::identity::SchemaId;

/// Top-level error type for schema loading and validation.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The file could not be read or is not valid JSON.
    #[error("Unable to parse file: {}", .path.display())]
    Parse {
        /// Path as supplied by the caller.
        path: PathBuf,
        /// What actually went wrong.
        #[source]
        cause: ParseCause,
    },

    /// The document's declared `id` disagrees with its path-derived identifier.
    #[error("Schema id mismatch in {}: expected {expected}, found {declared}", .path.display())]
    IdentityMismatch {
        /// File that declared the conflicting identifier.
        path: PathBuf,
        /// Identifier derived from the file location.
        expected: SchemaId,
        /// Identifier declared inside the document.
        declared: String,
    },

    /// Validation was requested against an identifier that was never loaded.
    #[error("Schema is not loaded: {id}")]
    NotLoaded {
        /// The identifier that was requested.
        id: String,
    },

    /// A different document is already registered under the same identifier.
    #[error("Schema id conflict: {id} from {} is already registered with different content", .path.display())]
    Conflict {
        /// The contested identifier.
        id: SchemaId,
        /// File whose load was rejected.
        path: PathBuf,
    },

    /// Schema discovery under a directory failed.
    #[error("Unable to discover schemas under {}: {source}", .path.display())]
    Discovery {
        /// Directory that was being searched.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },

    /// A loaded schema could not be compiled by the validation engine.
    #[error("Schema {id} cannot be compiled: {reason}")]
    InvalidSchema {
        /// Identifier of the offending schema.
        id: SchemaId,
        /// Engine-provided reason.
        reason: String,
    },
}

/// Underlying cause of a [`SchemaError::Parse`].
#[derive(Error, Debug)]
pub enum ParseCause {
    /// The file could not be read.
    #[error("read failed: {0}")]
    Read(#[from] std::io::Error),

    /// The bytes are not valid JSON text.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl SchemaError {
    /// The path this error concerns, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            SchemaError::Parse { path, .. }
            | SchemaError::IdentityMismatch { path, .. }
            | SchemaError::Conflict { path, .. }
            | SchemaError::Discovery { path, .. } => Some(path),
            SchemaError::NotLoaded { .. } | SchemaError::InvalidSchema { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn parse_message_names_path_as_given() {
        let err = SchemaError::Parse {
            path: PathBuf::from("./bad.json"),
            cause: ParseCause::Read(std::io::Error::from(std::io::ErrorKind::NotFound)),
        };
        assert_eq!(err.to_string(), "Unable to parse file: ./bad.json");
    }

    #[test]
    fn parse_error_keeps_cause_as_source() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = SchemaError::Parse {
            path: PathBuf::from("a.json"),
            cause: json_err.into(),
        };
        let source = err.source().expect("cause is exposed");
        assert!(source.to_string().starts_with("invalid JSON"));
    }

    #[test]
    fn not_loaded_message() {
        let err = SchemaError::NotLoaded {
            id: "notThere".to_string(),
        };
        assert_eq!(err.to_string(), "Schema is not loaded: notThere");
        assert!(err.path().is_none());
    }

    #[test]
    fn mismatch_names_both_identifiers() {
        let err = SchemaError::IdentityMismatch {
            path: PathBuf::from("folder/number.json"),
            expected: SchemaId::parse("/folder/number.json"),
            declared: "/folder/folder/number.json".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("expected /folder/number.json"));
        assert!(msg.contains("found /folder/folder/number.json"));
        assert_eq!(err.path(), Some(std::path::Path::new("folder/number.json")));
    }
}
