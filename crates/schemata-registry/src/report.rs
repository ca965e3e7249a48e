//! # Validation Reports
//!
//! Structured description of why a document failed validation: every
//! constraint violation with its location, plus any `$ref` targets that
//! could not be resolved while compiling the schema.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single validation violation with structured context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// JSON Pointer path to the violating value in the instance.
    pub instance_path: String,
    /// JSON Pointer path within the schema that triggered the error.
    pub schema_path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "  (root): {}", self.message)
        } else {
            write!(f, "  {}: {}", self.instance_path, self.message)
        }
    }
}

/// Result of validating one document against one schema.
///
/// [`SchemaValidator::validate`](crate::SchemaValidator::validate) only hands
/// out reports for failures, so callers always see `valid == false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Whether the document satisfied every constraint.
    pub valid: bool,
    /// Every constraint violation found.
    pub errors: Vec<Violation>,
    /// `$ref` targets that were referenced but never registered.
    pub missing: Vec<String>,
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let missing = self
            .missing
            .iter()
            .map(|target| format!("  missing schema: {target}"));
        let lines = self.errors.iter().map(ToString::to_string).chain(missing);
        for (i, line) in lines.enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(&line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn violation_display_format() {
        let v = Violation {
            instance_path: "/a/0".to_string(),
            schema_path: "/properties/a/items/minimum".to_string(),
            message: "3 is less than the minimum of 5".to_string(),
        };
        let display = v.to_string();
        assert!(display.contains("/a/0"));
        assert!(display.contains("less than the minimum"));
    }

    #[test]
    fn violation_display_root() {
        let v = Violation {
            instance_path: String::new(),
            schema_path: "/type".to_string(),
            message: r#"5 is not of type "string""#.to_string(),
        };
        assert!(v.to_string().contains("(root)"));
    }

    #[test]
    fn report_serializes_to_json() {
        let report = ValidationReport {
            valid: false,
            errors: vec![],
            missing: vec!["/other-schema".to_string()],
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["valid"], false);
        assert_eq!(json["missing"][0], "/other-schema");
        assert!(json["errors"].as_array().unwrap().is_empty());
        assert!(report.to_string().contains("missing schema: /other-schema"));
    }

    #[test]
    fn report_display_puts_each_entry_on_its_own_line() {
        let report = ValidationReport {
            valid: false,
            errors: vec![Violation {
                instance_path: "/n".to_string(),
                schema_path: "/properties/n/minimum".to_string(),
                message: "1 is less than the minimum of 5".to_string(),
            }],
            missing: vec!["/a.json".to_string(), "/b.json".to_string()],
        };
        let text = report.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "  /n: 1 is less than the minimum of 5",
                "  missing schema: /a.json",
                "  missing schema: /b.json",
            ]
        );
    }
}
