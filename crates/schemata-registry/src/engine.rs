//! # Validation Engine
//!
//! The JSON Schema constraint evaluation behind the registry. The registry
//! talks to it only through [`ValidationEngine`]; [`JsonSchemaEngine`] is the
//! production implementation on the `jsonschema` crate (Draft 4, whose
//! identifier keyword is `id`).
//!
//! ## Schema Resolution
//!
//! Registered identifiers are path-like (`/folder/number.json`) and may hold
//! any character a file name can. Before a document reaches the `jsonschema`
//! crate its `id` and every relative `$ref` are rewritten to absolute
//! `json-schema:///` URIs with each path segment percent-encoded, so
//! `/my schema.json` becomes `json-schema:///my%20schema.json`. A `UriMap`
//! remembers every URI it produced and maps it back to the identifier.
//! Every cross-schema `$ref` is answered by a local retriever; nothing is
//! fetched over the network.
//!
//! ## Missing References
//!
//! A `$ref` to an identifier that was never registered does not fail
//! compilation. The retriever answers it with an empty (accept-all) schema
//! and records the target, which is reported back as `missing`.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::Path;
use std::sync::Arc;

use jsonschema::paths::{LazyLocation, Location};
use jsonschema::{Draft, Keyword, Retrieve, Uri, ValidationError, ValidationOptions};
use parking_lot::Mutex;
use serde_json::{Map, Value};
use url::Url;

use schemata_core::{normalize, SchemaError, SchemaId};

use crate::report::{ValidationReport, Violation};

/// URI scheme prefix for schemas that carry no absolute base of their own.
const LOCAL_URI_PREFIX: &str = "json-schema://";

/// Root every registered identifier is encoded under.
const LOCAL_URI_ROOT: &str = "json-schema:///";

/// Keywords whose values are data, not subschemas, and are never searched
/// for `$ref`.
const DATA_KEYWORDS: [&str; 4] = ["enum", "const", "default", "examples"];

/// A custom string format check. Returns `true` when the value conforms.
pub type FormatCheck = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// A custom keyword check, called with the instance and the keyword's value
/// in the schema.
pub type KeywordCheck = Arc<dyn Fn(&Value, &Value) -> Result<(), KeywordFailure> + Send + Sync>;

/// Why a custom keyword rejected an instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeywordFailure {
    /// A literal message.
    Message(String),
    /// A failure described by an error registered with `define_error`.
    /// `{name}` placeholders in its template are filled from `params`.
    Coded {
        /// Name the error was registered under.
        error: String,
        /// Template substitutions.
        params: BTreeMap<String, String>,
    },
}

impl From<&str> for KeywordFailure {
    fn from(message: &str) -> Self {
        KeywordFailure::Message(message.to_string())
    }
}

impl From<String> for KeywordFailure {
    fn from(message: String) -> Self {
        KeywordFailure::Message(message)
    }
}

/// The operations the registry needs from a JSON Schema implementation.
pub trait ValidationEngine: Send + Sync {
    /// Register (or replace) a schema document under `id`.
    fn add_schema(&mut self, id: &SchemaId, document: Value);

    /// Look up a registered schema document.
    fn schema(&self, id: &str) -> Option<&Value>;

    /// Validate `data` against the schema registered under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::InvalidSchema`] if the schema cannot be compiled.
    fn validate_result(&self, data: &Value, id: &SchemaId) -> Result<ValidationReport, SchemaError>;

    /// Every `$ref` target across registered schemas that is not itself
    /// registered, sorted and de-duplicated.
    fn missing_uris(&self) -> Vec<String>;

    /// Register a custom `format` check.
    fn add_format(&mut self, name: &str, check: FormatCheck);

    /// Register a custom keyword check.
    fn define_keyword(&mut self, name: &str, check: KeywordCheck);

    /// Register a named error code with a message template.
    fn define_error(&mut self, name: &str, code: u32, template: &str);

    /// Numeric code of a registered error.
    fn error_code(&self, name: &str) -> Option<u32>;
}

/// A named error registered through `define_error`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct DefinedError {
    code: u32,
    template: String,
}

/// Registered error codes, keyed by name.
#[derive(Debug, Clone, Default)]
struct ErrorCatalog {
    entries: HashMap<String, DefinedError>,
}

impl ErrorCatalog {
    fn render(&self, failure: &KeywordFailure) -> String {
        match failure {
            KeywordFailure::Message(message) => message.clone(),
            KeywordFailure::Coded { error, params } => match self.entries.get(error) {
                Some(defined) => {
                    let mut message = defined.template.clone();
                    for (key, value) in params {
                        message = message.replace(&format!("{{{key}}}"), value);
                    }
                    message
                }
                None => format!("{error} (undefined error)"),
            },
        }
    }
}

/// Identifier to URI translation for one validator compilation.
///
/// Every URI handed to `jsonschema` is produced here, so the reverse lookup
/// never has to decode percent-escapes.
#[derive(Default)]
struct UriMap {
    identifiers: Mutex<HashMap<String, String>>,
}

impl UriMap {
    /// The URI for `id`, remembered for [`identifier`](Self::identifier).
    fn uri(&self, id: &str) -> String {
        let uri = encode_identifier(id);
        self.identifiers.lock().insert(uri.clone(), id.to_string());
        uri
    }

    /// The identifier a URI (with or without fragment) stands for.
    fn identifier(&self, uri: &str) -> String {
        let without_fragment = uri.split('#').next().unwrap_or(uri);
        match self.identifiers.lock().get(without_fragment) {
            Some(id) => id.clone(),
            None => uri_to_identifier(without_fragment).to_string(),
        }
    }

    /// Copy of `document` ready for `jsonschema`: its `id` is the URI for
    /// `id` and its relative `$ref`s are absolute URIs.
    fn prepare(&self, id: &str, document: &Value) -> Value {
        let mut document = document.clone();
        self.rewrite_references(&SchemaId::parse(id), &mut document);
        if let Value::Object(map) = &mut document {
            map.insert("id".to_string(), Value::String(self.uri(id)));
        }
        document
    }

    fn rewrite_references(&self, base: &SchemaId, value: &mut Value) {
        match value {
            Value::Object(map) => {
                for (key, child) in map.iter_mut() {
                    if key == "$ref" {
                        let rewritten = child.as_str().and_then(|r| self.reference_uri(base, r));
                        if let Some(uri) = rewritten {
                            *child = Value::String(uri);
                        }
                    } else if !DATA_KEYWORDS.contains(&key.as_str()) {
                        self.rewrite_references(base, child);
                    }
                }
            }
            Value::Array(items) => {
                for item in items {
                    self.rewrite_references(base, item);
                }
            }
            _ => {}
        }
    }

    /// Absolute URI for a relative or root-relative `$ref`. Same-document
    /// and already-absolute references are left alone.
    fn reference_uri(&self, base: &SchemaId, reference: &str) -> Option<String> {
        let (target, fragment) = match reference.split_once('#') {
            Some((target, fragment)) => (target, Some(fragment)),
            None => (reference, None),
        };
        if target.is_empty() || is_absolute_uri(target) {
            return None;
        }

        let mut uri = self.uri(&resolve_reference(base, target)?);
        if let Some(fragment) = fragment {
            uri.push('#');
            uri.push_str(fragment);
        }
        Some(uri)
    }
}

/// Retriever that answers cross-schema `$ref`s from the registry and
/// records every target it could not find.
struct RegistryRetriever {
    schemas: Arc<HashMap<String, Value>>,
    uris: Arc<UriMap>,
    missing: Arc<Mutex<BTreeSet<String>>>,
}

impl Retrieve for RegistryRetriever {
    fn retrieve(
        &self,
        uri: &Uri<&str>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        let key = self.uris.identifier(uri.as_str());

        if let Some(document) = self.schemas.get(&key) {
            return Ok(self.uris.prepare(&key, document));
        }

        tracing::warn!(reference = %key, "schema reference is not registered");
        self.missing.lock().insert(key);
        Ok(serde_json::json!({}))
    }
}

/// A user-defined keyword, instantiated once per occurrence in a schema.
struct RegisteredKeyword {
    check: KeywordCheck,
    errors: Arc<ErrorCatalog>,
    value: Value,
    location: Location,
}

impl Keyword for RegisteredKeyword {
    fn validate<'i>(
        &self,
        instance: &'i Value,
        location: &LazyLocation,
    ) -> Result<(), ValidationError<'i>> {
        match (self.check)(instance, &self.value) {
            Ok(()) => Ok(()),
            Err(failure) => Err(ValidationError::custom(
                self.location.clone(),
                location.into(),
                instance,
                self.errors.render(&failure),
            )),
        }
    }

    fn is_valid(&self, instance: &Value) -> bool {
        (self.check)(instance, &self.value).is_ok()
    }
}

/// [`ValidationEngine`] backed by the `jsonschema` crate.
///
/// Keeps registered documents in memory and compiles a validator per
/// `validate_result` call, with every other registered schema reachable
/// through `$ref`.
pub struct JsonSchemaEngine {
    schemas: Arc<HashMap<String, Value>>,
    formats: Vec<(String, FormatCheck)>,
    keywords: Vec<(String, KeywordCheck)>,
    errors: Arc<ErrorCatalog>,
    validate_formats: bool,
}

impl JsonSchemaEngine {
    /// Create an empty engine that checks `format` keywords.
    pub fn new() -> Self {
        Self {
            schemas: Arc::new(HashMap::new()),
            formats: Vec::new(),
            keywords: Vec::new(),
            errors: Arc::new(ErrorCatalog::default()),
            validate_formats: true,
        }
    }

    /// Enable or disable `format` checking.
    pub fn with_format_validation(mut self, enabled: bool) -> Self {
        self.validate_formats = enabled;
        self
    }

    fn build_options(
        &self,
        uris: Arc<UriMap>,
        missing: Arc<Mutex<BTreeSet<String>>>,
    ) -> ValidationOptions {
        let mut opts = jsonschema::options();
        opts.with_draft(Draft::Draft4);
        opts.should_validate_formats(self.validate_formats);

        for (name, check) in &self.formats {
            let check = Arc::clone(check);
            opts.with_format(name.clone(), move |value: &str| check(value));
        }

        for (name, check) in &self.keywords {
            let check = Arc::clone(check);
            let errors = Arc::clone(&self.errors);
            opts.with_keyword(
                name.clone(),
                move |_parent: &Map<String, Value>, value: &Value, location: Location| {
                    Ok(Box::new(RegisteredKeyword {
                        check: Arc::clone(&check),
                        errors: Arc::clone(&errors),
                        value: value.clone(),
                        location,
                    }))
                },
            );
        }

        opts.with_retriever(RegistryRetriever {
            schemas: Arc::clone(&self.schemas),
            uris,
            missing,
        });

        opts
    }
}

impl Default for JsonSchemaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for JsonSchemaEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonSchemaEngine")
            .field("schemas", &self.schemas.len())
            .field("formats", &self.formats.iter().map(|(n, _)| n).collect::<Vec<_>>())
            .field("keywords", &self.keywords.iter().map(|(n, _)| n).collect::<Vec<_>>())
            .field("validate_formats", &self.validate_formats)
            .finish()
    }
}

impl ValidationEngine for JsonSchemaEngine {
    fn add_schema(&mut self, id: &SchemaId, document: Value) {
        Arc::make_mut(&mut self.schemas).insert(id.as_str().to_string(), document);
    }

    fn schema(&self, id: &str) -> Option<&Value> {
        self.schemas.get(id)
    }

    fn validate_result(&self, data: &Value, id: &SchemaId) -> Result<ValidationReport, SchemaError> {
        let document = self.schemas.get(id.as_str()).ok_or_else(|| SchemaError::InvalidSchema {
            id: id.clone(),
            reason: "schema is not registered with the engine".to_string(),
        })?;

        let uris = Arc::new(UriMap::default());
        let missing = Arc::new(Mutex::new(BTreeSet::new()));
        let root = uris.prepare(id.as_str(), document);
        let validator = self
            .build_options(uris, Arc::clone(&missing))
            .build(&root)
            .map_err(|e| SchemaError::InvalidSchema {
                id: id.clone(),
                reason: e.to_string(),
            })?;

        let errors: Vec<Violation> = validator
            .iter_errors(data)
            .map(|e| Violation {
                instance_path: e.instance_path.to_string(),
                schema_path: e.schema_path.to_string(),
                message: e.to_string(),
            })
            .collect();

        let missing: Vec<String> = missing.lock().iter().cloned().collect();
        Ok(ValidationReport {
            valid: errors.is_empty(),
            errors,
            missing,
        })
    }

    fn missing_uris(&self) -> Vec<String> {
        let mut referenced = BTreeSet::new();
        for (id, document) in self.schemas.iter() {
            collect_references(&SchemaId::parse(id.as_str()), document, &mut referenced);
        }
        referenced
            .into_iter()
            .filter(|target| !self.schemas.contains_key(target))
            .collect()
    }

    fn add_format(&mut self, name: &str, check: FormatCheck) {
        self.formats.retain(|(existing, _)| existing != name);
        self.formats.push((name.to_string(), check));
    }

    fn define_keyword(&mut self, name: &str, check: KeywordCheck) {
        self.keywords.retain(|(existing, _)| existing != name);
        self.keywords.push((name.to_string(), check));
    }

    fn define_error(&mut self, name: &str, code: u32, template: &str) {
        Arc::make_mut(&mut self.errors).entries.insert(
            name.to_string(),
            DefinedError {
                code,
                template: template.to_string(),
            },
        );
    }

    fn error_code(&self, name: &str) -> Option<u32> {
        self.errors.entries.get(name).map(|defined| defined.code)
    }
}

/// Absolute local URI for an identifier, each segment percent-encoded.
fn encode_identifier(id: &str) -> String {
    let Ok(mut uri) = Url::parse(LOCAL_URI_ROOT) else {
        return format!("{LOCAL_URI_PREFIX}{id}");
    };
    if let Ok(mut segments) = uri.path_segments_mut() {
        segments.clear().extend(id.trim_start_matches('/').split('/'));
    }
    uri.into()
}

fn is_absolute_uri(target: &str) -> bool {
    target.contains("://") || target.starts_with("urn:")
}

/// Map a resolved reference URI back to the identifier space.
fn uri_to_identifier(uri: &str) -> &str {
    let without_fragment = uri.split('#').next().unwrap_or(uri);
    without_fragment
        .strip_prefix(LOCAL_URI_PREFIX)
        .unwrap_or(without_fragment)
}

/// Resolve a `$ref` value found inside the schema named `base`.
///
/// Returns `None` for same-document references (`#...`).
fn resolve_reference(base: &SchemaId, reference: &str) -> Option<String> {
    let target = reference.split('#').next().unwrap_or_default();
    if target.is_empty() {
        return None;
    }
    if is_absolute_uri(target) {
        return Some(uri_to_identifier(target).to_string());
    }
    if target.starts_with('/') {
        return Some(target.to_string());
    }

    let joined = format!("{}{target}", base.parent());
    let (segments, _) = normalize(Path::new(&joined));
    Some(format!("/{}", segments.join("/")))
}

/// Collect the targets of every `$ref` inside `value`.
fn collect_references(base: &SchemaId, value: &Value, out: &mut BTreeSet<String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                if key == "$ref" {
                    if let Some(target) = child.as_str().and_then(|r| resolve_reference(base, r)) {
                        out.insert(target);
                    }
                } else if !DATA_KEYWORDS.contains(&key.as_str()) {
                    collect_references(base, child, out);
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_references(base, item, out);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn engine_with(schemas: &[(&str, Value)]) -> JsonSchemaEngine {
        let mut engine = JsonSchemaEngine::new();
        for (id, document) in schemas {
            engine.add_schema(&SchemaId::parse(*id), document.clone());
        }
        engine
    }

    #[test]
    fn validates_against_registered_schema() {
        let engine = engine_with(&[("/number.json", json!({"type": "number", "minimum": 5}))]);
        let id = SchemaId::parse("/number.json");

        assert!(engine.validate_result(&json!(7), &id).unwrap().valid);

        let report = engine.validate_result(&json!(3), &id).unwrap();
        assert!(!report.valid);
        assert_eq!(report.errors.len(), 1);
        assert!(report.missing.is_empty());
    }

    #[test]
    fn email_format_is_checked() {
        let engine = engine_with(&[("/email.json", json!({"type": "string", "format": "email"}))]);
        let id = SchemaId::parse("/email.json");

        assert!(engine.validate_result(&json!("someone@example.net"), &id).unwrap().valid);
        assert!(!engine.validate_result(&json!("not an email"), &id).unwrap().valid);
    }

    #[test]
    fn format_checking_can_be_disabled() {
        let mut engine = JsonSchemaEngine::new().with_format_validation(false);
        engine.add_schema(
            &SchemaId::parse("/email.json"),
            json!({"type": "string", "format": "email"}),
        );
        let report = engine
            .validate_result(&json!("not an email"), &SchemaId::parse("/email.json"))
            .unwrap();
        assert!(report.valid);
    }

    #[test]
    fn cross_schema_references_resolve_locally() {
        let engine = engine_with(&[
            ("/folder/number.json", json!({"type": "number", "minimum": 5})),
            (
                "/folder/holder.json",
                json!({"type": "object", "properties": {"n": {"$ref": "number.json"}}}),
            ),
            (
                "/top.json",
                json!({"type": "object", "properties": {"n": {"$ref": "/folder/number.json"}}}),
            ),
        ]);

        for id in ["/folder/holder.json", "/top.json"] {
            let id = SchemaId::parse(id);
            assert!(engine.validate_result(&json!({"n": 9}), &id).unwrap().valid);
            let report = engine.validate_result(&json!({"n": 1}), &id).unwrap();
            assert!(!report.valid, "{id} accepted a value below the referenced minimum");
            assert_eq!(report.errors[0].instance_path, "/n");
        }
    }

    #[test]
    fn unresolved_reference_is_reported_not_fatal() {
        let engine = engine_with(&[(
            "/missing-one.json",
            json!({"type": "object", "properties": {"a": {"$ref": "/other-schema"}}}),
        )]);
        let id = SchemaId::parse("/missing-one.json");

        let report = engine.validate_result(&json!({"a": 1}), &id).unwrap();
        assert!(report.valid);
        assert_eq!(report.missing, vec!["/other-schema".to_string()]);

        let report = engine.validate_result(&json!(5), &id).unwrap();
        assert!(!report.valid);
        assert_eq!(report.missing, vec!["/other-schema".to_string()]);
    }

    #[test]
    fn missing_uris_lists_dangling_references_once() {
        let engine = engine_with(&[
            ("/a.json", json!({"properties": {"x": {"$ref": "/other-schema"}, "y": {"$ref": "b.json#/definitions/q"}}})),
            ("/b.json", json!({"definitions": {"q": {"$ref": "/other-schema"}}, "enum": [{"$ref": "/not-a-ref"}]})),
            ("/c.json", json!({"items": [{"$ref": "#/definitions/local"}, {"$ref": "sub/../d.json"}]})),
        ]);
        assert_eq!(
            engine.missing_uris(),
            vec!["/d.json".to_string(), "/other-schema".to_string()]
        );
    }

    #[test]
    fn custom_format_is_applied() {
        let mut engine = engine_with(&[("/t.json", json!({"type": "string", "format": "testFormat"}))]);
        engine.add_format("testFormat", Arc::new(|value: &str| value == "testData"));
        let id = SchemaId::parse("/t.json");

        assert!(engine.validate_result(&json!("testData"), &id).unwrap().valid);
        assert!(!engine.validate_result(&json!("notTestData"), &id).unwrap().valid);
    }

    #[test]
    fn custom_keyword_renders_defined_error() {
        let mut engine = engine_with(&[("/moon.json", json!({"moon": "full"}))]);
        engine.define_error("MOON_MISMATCH", 10001, "Incorrect moon (expected {expected}, got {actual})");
        engine.define_keyword(
            "moon",
            Arc::new(|instance: &Value, expected: &Value| {
                if instance.get("moon") == Some(expected) {
                    return Ok(());
                }
                Err(KeywordFailure::Coded {
                    error: "MOON_MISMATCH".to_string(),
                    params: BTreeMap::from([
                        ("expected".to_string(), expected.to_string()),
                        ("actual".to_string(), instance.get("moon").cloned().unwrap_or(Value::Null).to_string()),
                    ]),
                })
            }),
        );
        let id = SchemaId::parse("/moon.json");

        assert_eq!(engine.error_code("MOON_MISMATCH"), Some(10001));
        assert!(engine.validate_result(&json!({"moon": "full"}), &id).unwrap().valid);

        let report = engine.validate_result(&json!({"moon": "new"}), &id).unwrap();
        assert!(!report.valid);
        assert_eq!(
            report.errors[0].message,
            r#"Incorrect moon (expected "full", got "new")"#
        );
    }

    #[test]
    fn undefined_error_name_is_still_reported() {
        let catalog = ErrorCatalog::default();
        let failure = KeywordFailure::Coded {
            error: "NOPE".to_string(),
            params: BTreeMap::new(),
        };
        assert_eq!(catalog.render(&failure), "NOPE (undefined error)");
        assert_eq!(catalog.render(&"plain".into()), "plain");
    }

    #[test]
    fn uncompilable_schema_is_an_error() {
        let engine = engine_with(&[("/bad.json", json!({"type": 12}))]);
        let err = engine
            .validate_result(&json!(1), &SchemaId::parse("/bad.json"))
            .unwrap_err();
        assert!(matches!(err, SchemaError::InvalidSchema { .. }));
    }

    #[test]
    fn uri_mapping_strips_local_scheme_and_fragment() {
        assert_eq!(uri_to_identifier("json-schema:///a/b.json#/x"), "/a/b.json");
        assert_eq!(uri_to_identifier("https://example.com/s.json"), "https://example.com/s.json");
    }

    #[test]
    fn identifiers_are_percent_encoded_per_segment() {
        assert_eq!(encode_identifier("/my schema.json"), "json-schema:///my%20schema.json");
        assert_eq!(encode_identifier("/a#b.json"), "json-schema:///a%23b.json");
        assert_eq!(encode_identifier("/100%.json"), "json-schema:///100%25.json");
        assert_eq!(
            encode_identifier("/dir/\u{fc}n\u{ef}.json"),
            "json-schema:///dir/%C3%BCn%C3%AF.json"
        );
    }

    #[test]
    fn uri_map_returns_identifiers_it_encoded() {
        let uris = UriMap::default();
        for id in ["/my schema.json", "/a#b.json", "/100%.json", "/\u{fc}n\u{ef}.json"] {
            let uri = uris.uri(id);
            assert_eq!(uris.identifier(&uri), id);
            assert_eq!(uris.identifier(&format!("{uri}#/definitions/x")), id);
        }
    }

    #[test]
    fn uri_unsafe_identifiers_validate_and_resolve_references() {
        let engine = engine_with(&[
            ("/my schema.json", json!({"type": "string"})),
            ("/100%.json", json!({"type": "number", "maximum": 100})),
            ("/a#b.json", json!({"type": "boolean"})),
            (
                "/holder.json",
                json!({"type": "object", "properties": {
                    "name": {"$ref": "/my schema.json"},
                    "pct": {"$ref": "100%.json"},
                    "gone": {"$ref": "/not here.json"}
                }}),
            ),
        ]);

        assert!(engine.validate_result(&json!("x"), &SchemaId::parse("/my schema.json")).unwrap().valid);
        assert!(engine.validate_result(&json!(true), &SchemaId::parse("/a#b.json")).unwrap().valid);
        assert!(!engine.validate_result(&json!(1), &SchemaId::parse("/a#b.json")).unwrap().valid);

        let holder = SchemaId::parse("/holder.json");
        let report = engine.validate_result(&json!({"name": "x", "pct": 50}), &holder).unwrap();
        assert!(report.valid);
        assert_eq!(report.missing, vec!["/not here.json".to_string()]);

        let report = engine.validate_result(&json!({"name": 1, "pct": 500}), &holder).unwrap();
        assert_eq!(report.errors.len(), 2);
        assert_eq!(engine.missing_uris(), vec!["/not here.json".to_string()]);
    }
}
