//! Test builders: ergonomic constructors for records and pipelines.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use serde_json::{Map, Value};
use sift_core::{DisplayTemplate, Highlighter, Matcher, SearchPipeline};

// ---------------------------------------------------------------------------
// RecordBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for object records.
///
/// # Example
///
/// ```rust
/// let record = RecordBuilder::new()
///     .field("title", "Big Magic")
///     .field("authors", json!(["Elizabeth Gilbert"]))
///     .build();
/// ```
#[derive(Default)]
pub struct RecordBuilder {
    fields: Map<String, Value>,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    pub fn build(self) -> Value {
        Value::Object(self.fields)
    }
}

// ---------------------------------------------------------------------------
// Pipelines
// ---------------------------------------------------------------------------

/// A book pipeline with bold markers, optionally per character.
pub fn book_pipeline(per_character: bool) -> SearchPipeline {
    SearchPipeline::new(
        Matcher::new(crate::common::BOOK_FIELDS.iter().copied()),
        DisplayTemplate::default(),
        Highlighter::new("bold").per_character(per_character),
    )
}
