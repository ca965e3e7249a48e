//! # schemata-core — Foundational Types
//!
//! Defines the identity and error primitives shared by every other crate in
//! the workspace. It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **`SchemaId` newtype.** Every schema is named by an identifier derived
//!    from its location on disk. The identifier always begins with `/` and
//!    is only constructed through [`identity::resolve`] or
//!    [`SchemaId::parse`]. No bare strings cross the registry boundary.
//!
//! 2. **Lexical path normalization.** `.` and `..` segments are collapsed
//!    before a base path is stripped, so `./schemas/a.json` and
//!    `schemas/x/../a.json` name the same schema.
//!
//! 3. **Tagged errors.** [`SchemaError`] distinguishes "could not parse",
//!    "declared identity disagrees with location", and "never loaded" with
//!    structured fields. Callers match on variants, not on message text.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `schemata-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod identity;

// Re-export primary types for ergonomic imports.
pub use error::{ParseCause, SchemaError};
pub use identity::{normalize, resolve, SchemaId};
