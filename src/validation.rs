//! Structural schema validation for timelines
//!
//! Provides [`TimelineValidator`], which checks an untrusted
//! [`serde_json::Value`] against a JSON-Schema-like document and, on success,
//! produces a typed [`Timeline`]. The schema document is treated as an
//! externally supplied contract: a copy of `schema/timeline.json` is bundled
//! for the common case, and alternate documents can be loaded with
//! [`TimelineValidator::from_schema_str`].
//!
//! Validation is structural only. It never interprets field semantics across
//! events, so e.g. a `dependsOn` id is never resolved against actual event
//! ids.

use serde_json::Value;
use tracing::debug;

use crate::error::{EvalError, Result};
use crate::timeline::Timeline;

/// Bundled timeline schema document
const DEFAULT_SCHEMA_JSON: &str = include_str!("../schema/timeline.json");

/// Upper bound on collected validation messages. Validation is non-exhaustive
/// by contract: callers may only assume that at least one message is reported
/// for any invalid input.
const MAX_VALIDATION_ERRORS: usize = 64;

/// Schema-driven structural validator for timeline input
///
/// Instances are immutable once constructed and safe to share across threads.
/// Multiple validators with different schema documents can coexist; there is
/// no process-wide compiled-schema state.
#[derive(Debug)]
pub struct TimelineValidator {
    schema: Value,
}

impl Default for TimelineValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl TimelineValidator {
    /// Create a validator using the bundled timeline schema
    pub fn new() -> Self {
        // The bundled artifact is checked into the crate; a parse failure is
        // a packaging bug, not a runtime condition.
        let schema = serde_json::from_str(DEFAULT_SCHEMA_JSON)
            .expect("bundled timeline schema is valid JSON");
        Self { schema }
    }

    /// Create a validator from an externally supplied schema document
    pub fn from_schema_str(schema_content: &str) -> Result<Self> {
        let schema: Value = serde_json::from_str(schema_content)
            .map_err(|e| EvalError::schema(format!("Invalid schema document: {}", e)))?;
        if !schema.is_object() {
            return Err(EvalError::schema("Schema document must be a JSON object"));
        }
        Ok(Self { schema })
    }

    /// The schema document this validator checks against
    pub fn schema(&self) -> &Value {
        &self.schema
    }

    /// Validate an untrusted value against the timeline schema
    ///
    /// On success returns the typed [`Timeline`]. On failure returns
    /// [`EvalError::Validation`] carrying one message per detected structural
    /// mismatch (capped at an internal limit), each prefixed with the failing
    /// instance path or `(root)`. Deterministic: the same input always yields
    /// the same messages.
    pub fn validate(&self, input: &Value) -> Result<Timeline> {
        let mut errors = Vec::new();
        self.check(input, &self.schema, "", &mut errors);

        if !errors.is_empty() {
            debug!(error_count = errors.len(), "timeline failed schema validation");
            return Err(EvalError::Validation(errors));
        }

        serde_json::from_value(input.clone())
            .map_err(|e| EvalError::validation([format!("(root) {}", e)]))
    }

    /// Recursively check a value against a schema node
    fn check(&self, value: &Value, schema: &Value, path: &str, errors: &mut Vec<String>) {
        if errors.len() >= MAX_VALIDATION_ERRORS {
            return;
        }

        if let Some(expected) = schema.get("type") {
            if !type_matches(value, expected) {
                push_error(errors, path, format!("must be {}", type_label(expected)));
                // Deeper checks against a wrong-typed value would only add noise
                return;
            }
        }

        if let (Value::Object(map), Some(required)) =
            (value, schema.get("required").and_then(Value::as_array))
        {
            for req in required.iter().filter_map(Value::as_str) {
                if !map.contains_key(req) {
                    push_error(errors, path, format!("must have required property '{}'", req));
                }
            }
        }

        if let Value::Object(map) = value {
            let properties = schema.get("properties").and_then(Value::as_object);
            let strict = schema.get("additionalProperties") == Some(&Value::Bool(false));
            for (key, val) in map {
                match properties.and_then(|props| props.get(key)) {
                    Some(prop_schema) => {
                        let prop_path = format!("{}/{}", path, key);
                        self.check(val, prop_schema, &prop_path, errors);
                    }
                    None if strict => {
                        push_error(
                            errors,
                            path,
                            format!("must NOT have additional property '{}'", key),
                        );
                    }
                    None => {}
                }
            }
        }

        if let (Value::Array(items), Some(items_schema)) = (value, schema.get("items")) {
            for (i, item) in items.iter().enumerate() {
                let item_path = format!("{}/{}", path, i);
                self.check(item, items_schema, &item_path, errors);
            }
        }

        if let (Value::String(s), Some("date-time")) =
            (value, schema.get("format").and_then(Value::as_str))
        {
            if chrono::DateTime::parse_from_rfc3339(s).is_err() {
                push_error(errors, path, "must match format \"date-time\"");
            }
        }
    }
}

/// Record a message for the given instance path
fn push_error(errors: &mut Vec<String>, path: &str, message: impl AsRef<str>) {
    if errors.len() >= MAX_VALIDATION_ERRORS {
        return;
    }
    let path = if path.is_empty() { "(root)" } else { path };
    errors.push(format!("{} {}", path, message.as_ref()));
}

/// Check a value against a schema `type` keyword (string or union array)
fn type_matches(value: &Value, expected: &Value) -> bool {
    match expected {
        Value::String(t) => matches_single_type(value, t),
        Value::Array(types) => types
            .iter()
            .filter_map(Value::as_str)
            .any(|t| matches_single_type(value, t)),
        _ => true,
    }
}

fn matches_single_type(value: &Value, expected: &str) -> bool {
    match expected {
        "object" => value.is_object(),
        "array" => value.is_array(),
        "string" => value.is_string(),
        "number" => value.is_number(),
        "integer" => value.is_i64() || value.is_u64(),
        "boolean" => value.is_boolean(),
        "null" => value.is_null(),
        // Unknown type names do not constrain the value
        _ => true,
    }
}

fn type_label(expected: &Value) -> String {
    match expected {
        Value::String(t) => t.clone(),
        Value::Array(types) => types
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(","),
        _ => "any".to_string(),
    }
}
