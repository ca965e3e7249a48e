//! # Document Loading
//!
//! Reads the data documents that get validated (not the schemas). JSON and
//! YAML are both accepted; the format is chosen by file extension and YAML
//! is converted into the equivalent JSON value tree.

use std::path::Path;

use serde_json::{Map, Value};
use thiserror::Error;

/// The document file could not be loaded or parsed.
#[derive(Error, Debug)]
#[error("document load error for '{path}': {reason}")]
pub struct DocumentError {
    /// Path to the document that failed to load.
    pub path: String,
    /// Reason the document could not be loaded.
    pub reason: String,
}

/// Read a JSON or YAML document from disk.
///
/// `.yaml` / `.yml` files are parsed as YAML; everything else as JSON.
pub async fn read_document(path: &Path) -> Result<Value, DocumentError> {
    let fail = |reason: String| DocumentError {
        path: path.display().to_string(),
        reason,
    };

    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| fail(format!("cannot read file: {e}")))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    match ext {
        "yaml" | "yml" => {
            let yaml: serde_yaml::Value = serde_yaml::from_str(&content)
                .map_err(|e| fail(format!("invalid YAML: {e}")))?;
            yaml_into_json(yaml).map_err(|e| fail(format!("YAML has no JSON equivalent: {e}")))
        }
        _ => serde_json::from_str(&content).map_err(|e| fail(format!("invalid JSON: {e}"))),
    }
}

/// Turn a parsed YAML tree into the JSON value it denotes.
///
/// Tags are dropped. Mapping keys must be scalars; numbers and booleans are
/// rendered as their text.
fn yaml_into_json(yaml: serde_yaml::Value) -> Result<Value, String> {
    use serde_yaml::Value as Yaml;

    Ok(match yaml {
        Yaml::Null => Value::Null,
        Yaml::Bool(flag) => Value::Bool(flag),
        Yaml::Number(number) => yaml_number(&number)?,
        Yaml::String(text) => Value::String(text),
        Yaml::Sequence(items) => Value::Array(
            items
                .into_iter()
                .map(yaml_into_json)
                .collect::<Result<_, _>>()?,
        ),
        Yaml::Mapping(entries) => Value::Object(
            entries
                .into_iter()
                .map(|(key, value)| Ok((yaml_key(key)?, yaml_into_json(value)?)))
                .collect::<Result<Map<String, Value>, String>>()?,
        ),
        Yaml::Tagged(tagged) => yaml_into_json(tagged.value)?,
    })
}

fn yaml_number(number: &serde_yaml::Number) -> Result<Value, String> {
    if let Some(int) = number.as_i64() {
        return Ok(Value::from(int));
    }
    if let Some(uint) = number.as_u64() {
        return Ok(Value::from(uint));
    }
    number
        .as_f64()
        .and_then(serde_json::Number::from_f64)
        .map(Value::Number)
        .ok_or_else(|| format!("number {number} has no JSON form"))
}

fn yaml_key(key: serde_yaml::Value) -> Result<String, String> {
    match key {
        serde_yaml::Value::String(text) => Ok(text),
        serde_yaml::Value::Number(number) => Ok(number.to_string()),
        serde_yaml::Value::Bool(flag) => Ok(flag.to_string()),
        other => Err(format!("mapping key must be a scalar, found {other:?}")),
    }
}
