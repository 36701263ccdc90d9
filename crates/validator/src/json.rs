//! Validation of JSON objects against a tag schema.
//!
//! A [`JsonRecord`] pairs a `serde_json::Value` with a list of
//! `(field, tag)` entries. The object is treated as a record whose fields
//! are the schema entries, in schema order; every field is exported, and
//! kinds are inferred from the JSON values.
//!
//! # Examples
//!
//! ```
//! use structval::json::JsonRecord;
//! use serde_json::json;
//!
//! let schema = [("name", "min:2"), ("port", "min:1; max:65535"), ("tags", "in:a,b")];
//!
//! let ok = json!({ "name": "web", "port": 8080, "tags": ["a", "b", "a"] });
//! assert!(structval::validate(&JsonRecord::new(&ok, &schema)).is_ok());
//!
//! let bad = json!({ "name": "w", "port": 0, "tags": ["c"] });
//! let err = structval::validate(&JsonRecord::new(&bad, &schema)).unwrap_err();
//! assert_eq!(err.violations().map(|v| v.len()), Some(3));
//! ```

use std::borrow::Cow;

use serde_json::Value;

use crate::foundation::{FieldKind, FieldValue, Record, RecordField, Shape};

// ============================================================================
// JSON RECORD
// ============================================================================

/// A JSON object viewed as a record.
#[derive(Debug, Clone, Copy)]
pub struct JsonRecord<'a> {
    value: &'a Value,
    schema: &'a [(&'a str, &'a str)],
}

impl<'a> JsonRecord<'a> {
    /// Pairs a JSON value with a `(field, tag)` schema.
    #[must_use]
    pub fn new(value: &'a Value, schema: &'a [(&'a str, &'a str)]) -> Self {
        Self { value, schema }
    }

    /// The wrapped JSON value.
    #[must_use]
    pub fn value(&self) -> &'a Value {
        self.value
    }
}

impl Record for JsonRecord<'_> {
    fn shape(&self) -> Shape<'_> {
        let Value::Object(object) = self.value else {
            return Shape::Other(Cow::Borrowed(type_name(self.value)));
        };

        let fields = self
            .schema
            .iter()
            .filter_map(|(name, tag)| {
                let Some(value) = object.get(*name) else {
                    tracing::trace!(field = %name, "field missing from JSON object, skipping");
                    return None;
                };
                let kind = kind_of(value);
                let mut field = RecordField::new(*name, kind.clone()).with_tag(*tag);
                if kind.is_supported() {
                    field.value = value_of(value);
                }
                Some(field)
            })
            .collect();

        Shape::Record(fields)
    }
}

// ============================================================================
// KIND INFERENCE
// ============================================================================

/// Infers the field kind of a JSON value.
///
/// Arrays are sequences when all elements share a supported scalar kind;
/// an empty array counts as a sequence of strings.
#[must_use]
pub fn kind_of(value: &Value) -> FieldKind {
    match value {
        Value::Number(n) if n.is_i64() || n.is_u64() => FieldKind::Integer,
        Value::String(_) => FieldKind::String,
        Value::Array(items) => {
            if items.iter().all(|item| kind_of(item) == FieldKind::String) {
                FieldKind::SequenceOfString
            } else if items.iter().all(|item| kind_of(item) == FieldKind::Integer) {
                FieldKind::SequenceOfInteger
            } else {
                let element = items
                    .iter()
                    .map(kind_of)
                    .find(|kind| !kind.is_supported())
                    .unwrap_or_else(|| FieldKind::unsupported("mixed"));
                FieldKind::unsupported(element.name().to_owned())
            }
        }
        other => FieldKind::unsupported(type_name(other)),
    }
}

fn value_of(value: &Value) -> Option<FieldValue<'_>> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .map(i128::from)
            .or_else(|| n.as_u64().map(i128::from))
            .map(FieldValue::Int),
        Value::String(s) => Some(FieldValue::Str(s)),
        Value::Array(items) => items.iter().map(value_of).collect::<Option<_>>().map(FieldValue::Seq),
        _ => None,
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float64",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
