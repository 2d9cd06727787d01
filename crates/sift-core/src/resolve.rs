//! Field path resolution against nested records.
//!
//! A field path such as `user.age` addresses a value inside a record by
//! walking one member per delimiter-separated segment. Arrays are addressed
//! by canonical decimal index (`authors.0`; never `+1` or `01`).
//!
//! # Early termination
//!
//! When the walk reaches a value that is not a container while segments
//! remain, that value is returned as the result and the remaining segments are
//! ignored: `a.b.c` against `{"a": 5}` resolves to `5`.

use crate::value::is_container;
use crate::DEFAULT_DELIMITER;
use serde_json::Value;

/// Resolve `path` inside `record`, splitting segments on `delimiter`.
///
/// Returns `None` when `record` is not an object or array, or when a member
/// named along the path is absent. Never panics.
///
/// ```
/// use serde_json::json;
/// use sift_core::resolve::resolve;
///
/// let record = json!({"user": {"age": 23}, "token": "xxxx"});
/// assert_eq!(resolve("user.age", &record, "."), Some(&json!(23)));
/// assert_eq!(resolve("missing.path", &json!({}), "."), None);
/// assert_eq!(resolve("a.b.c", &json!({"a": 5}), "."), Some(&json!(5)));
/// ```
pub fn resolve<'a>(path: &str, record: &'a Value, delimiter: &str) -> Option<&'a Value> {
    if !is_container(record) {
        return None;
    }

    // An empty delimiter would split between every character; treat the
    // whole path as a single member name instead.
    if delimiter.is_empty() || !path.contains(delimiter) {
        return member(record, path);
    }

    let mut current = record;
    for segment in path.split(delimiter) {
        if !is_container(current) {
            break;
        }
        current = member(current, segment)?;
    }
    Some(current)
}

/// [`resolve`] with the default `.` delimiter.
pub fn resolve_default<'a>(path: &str, record: &'a Value) -> Option<&'a Value> {
    resolve(path, record, DEFAULT_DELIMITER)
}

/// Single-level lookup of `name` in a container.
fn member<'a>(container: &'a Value, name: &str) -> Option<&'a Value> {
    match container {
        Value::Object(map) => map.get(name),
        Value::Array(items) => array_index(name).and_then(|i| items.get(i)),
        _ => None,
    }
}

/// Canonical decimal index: ASCII digits, no sign, no leading zero except `0`.
fn array_index(name: &str) -> Option<usize> {
    let canonical = !name.is_empty()
        && name.bytes().all(|b| b.is_ascii_digit())
        && (name == "0" || !name.starts_with('0'));
    if canonical {
        name.parse().ok()
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
