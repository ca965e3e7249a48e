//! # Schema Identity
//!
//! Maps a filesystem path plus a base path to the canonical identifier a
//! schema is registered under.
//!
//! ## Invariant
//!
//! Identifiers are a pure function of the two paths after lexical
//! normalization. Two spellings of the same location (`./a/../b.json` and
//! `b.json`) always yield the same identifier, and the result always starts
//! with `/`.

use std::borrow::Borrow;
use std::fmt;
use std::path::{Component, Path};

use serde::{Deserialize, Serialize};

/// Canonical name of a schema inside one registry instance.
///
/// Always starts with `/`, e.g. `/email.json` or `/folder/number.json`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaId(String);

impl SchemaId {
    /// Build an identifier from an arbitrary string, adding the leading `/`
    /// when it is missing.
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        if raw.starts_with('/') {
            Self(raw)
        } else {
            Self(format!("/{raw}"))
        }
    }

    /// Access the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The directory part of the identifier, always ending in `/`.
    ///
    /// Relative `$ref` targets inside a schema resolve against this.
    pub fn parent(&self) -> &str {
        match self.0.rfind('/') {
            Some(idx) => &self.0[..=idx],
            None => "/",
        }
    }
}

impl fmt::Display for SchemaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SchemaId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for SchemaId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Lexically normalize a path into `/`-separated segments.
///
/// Collapses `.` segments, folds `..` into the preceding segment, and
/// drops `..` that would climb above the root of an absolute path. A
/// relative path that climbs above its start keeps its leading `..`
/// segments. Returns the segments and whether the path was absolute.
pub fn normalize(path: &Path) -> (Vec<String>, bool) {
    let mut segments: Vec<String> = Vec::new();
    let mut absolute = false;

    for component in path.components() {
        match component {
            Component::Prefix(prefix) => {
                segments.clear();
                segments.push(prefix.as_os_str().to_string_lossy().into_owned());
            }
            Component::RootDir => absolute = true,
            Component::CurDir => {}
            Component::ParentDir => {
                if segments.last().is_some_and(|last| last != "..") {
                    segments.pop();
                } else if !absolute {
                    segments.push("..".to_string());
                }
            }
            Component::Normal(part) => segments.push(part.to_string_lossy().into_owned()),
        }
    }

    (segments, absolute)
}

/// Derive the identifier for `file_path` relative to `base_path`.
///
/// An absent, empty, or `.` base path strips nothing. When `file_path`
/// does not live under `base_path` the identifier is the whole normalized
/// file path.
pub fn resolve(file_path: &Path, base_path: Option<&Path>) -> SchemaId {
    let (file_segments, file_absolute) = normalize(file_path);

    let stripped = match base_path {
        Some(base) => {
            let (base_segments, base_absolute) = normalize(base);
            if base_segments.is_empty() && !base_absolute {
                None
            } else if base_absolute == file_absolute
                && file_segments.len() >= base_segments.len()
                && file_segments[..base_segments.len()] == base_segments[..]
            {
                Some(&file_segments[base_segments.len()..])
            } else {
                None
            }
        }
        None => None,
    };

    let remainder = stripped.unwrap_or(&file_segments[..]);
    SchemaId::parse(remainder.join("/"))
}
