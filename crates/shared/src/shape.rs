//! Shape assertions over loosely-typed JSON responses
//!
//! The catalog's response bodies are owned by the server, so checks inspect
//! them as `serde_json::Value` and only insist on the properties they need.

use crate::{MissingFieldError, Result, ShapeMismatchError};
use serde_json::{Map, Value};

/// Featured observation properties every listed item carries
pub const FEATURED_FIELDS: [&str; 4] = ["id", "telescope", "targetName", "score"];

/// Import summary properties
pub const IMPORT_SUMMARY_FIELDS: [&str; 2] = ["totalProcessed", "imported"];

/// Page envelope properties
pub const PAGE_ENVELOPE_FIELDS: [&str; 5] =
    ["content", "pageable", "totalElements", "totalPages", "size"];

/// Name of a JSON value's kind, for error messages
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn mismatch(context: &str, expected: &str, value: &Value) -> ShapeMismatchError {
    ShapeMismatchError {
        context: context.to_string(),
        expected: expected.to_string(),
        found: kind_of(value).to_string(),
    }
}

/// Require `value` to be a JSON object
pub fn expect_object<'a>(value: &'a Value, context: &str) -> Result<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| mismatch(context, "object", value).into())
}

/// Require `value` to be a JSON array
pub fn expect_array<'a>(value: &'a Value, context: &str) -> Result<&'a Vec<Value>> {
    value
        .as_array()
        .ok_or_else(|| mismatch(context, "array", value).into())
}

/// Require every named property to be present; values may be anything, `null` included
pub fn require_fields(object: &Map<String, Value>, fields: &[&str], context: &str) -> Result<()> {
    for field in fields {
        if !object.contains_key(*field) {
            return Err(MissingFieldError {
                context: context.to_string(),
                field: (*field).to_string(),
                present: object.keys().cloned().collect(),
            }
            .into());
        }
    }
    Ok(())
}

/// Fetch a property that must be a non-negative whole number
///
/// `1.0` is accepted as 1, matching JavaScript number equality.
pub fn expect_u64(object: &Map<String, Value>, field: &str, context: &str) -> Result<u64> {
    let value = object.get(field).ok_or_else(|| MissingFieldError {
        context: context.to_string(),
        field: field.to_string(),
        present: object.keys().cloned().collect(),
    })?;
    value
        .as_u64()
        .or_else(|| {
            value
                .as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= u64::MAX as f64)
                .map(|f| f as u64)
        })
        .ok_or_else(|| mismatch(&format!("{}.{}", context, field), "non-negative integer", value).into())
}
