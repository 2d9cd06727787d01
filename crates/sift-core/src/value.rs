//! Loose string coercion of record values.
//!
//! The matcher and the display builder both need "the string form" of a
//! resolved value. Strings pass through; everything else is rendered the way
//! a browser would print it, so `["Jim Collins", "Jerry I. Porras"]` becomes
//! `Jim Collins,Jerry I. Porras` and `4.0` becomes `4`.

use serde_json::{Number, Value};

/// Whether a value can be descended into by a field path segment.
///
/// Objects and arrays are containers; `null` is not.
pub fn is_container(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

/// Short lowercase name of a value's JSON type, for diagnostics.
pub fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Coerce a value to its string form.
pub fn coerce(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_to_string(n),
        Value::Array(items) => join_with(items, ",", |item| match item {
            Value::Null => String::new(),
            other => coerce(other),
        }),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// String form of an absent value in compatibility mode.
pub const UNDEFINED: &str = "undefined";

/// Coerce a possibly-absent value. Absent values become the empty string.
pub fn coerce_opt(value: Option<&Value>) -> String {
    value.map(coerce).unwrap_or_default()
}

/// Like [`coerce`], but arrays are joined with `list_separator`.
///
/// Used for human-facing display strings (`Jim Collins, Jerry I. Porras`).
pub fn display(value: &Value, list_separator: &str) -> String {
    match value {
        Value::Array(items) => join_with(items, list_separator, |item| match item {
            Value::Null => String::new(),
            other => coerce(other),
        }),
        other => coerce(other),
    }
}

fn join_with(items: &[Value], sep: &str, f: impl Fn(&Value) -> String) -> String {
    items.iter().map(f).collect::<Vec<_>>().join(sep)
}

fn number_to_string(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
