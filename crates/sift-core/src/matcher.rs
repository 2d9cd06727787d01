//! Subsequence matcher — filters a record collection by a typed query.
//!
//! A field matches when every character of the lower-cased query appears in
//! the lower-cased field text in the same relative order, not necessarily
//! contiguously (`app` matches `pineapple`). A record passes when **any** of
//! the configured field paths matches. There is no scoring: the result is
//! the passing records in their original order.
//!
//! An empty query matches every field, so it returns the input unfiltered.
//! An empty field path list matches nothing.
//!
//! A field path that resolves to nothing searches as the empty string. With
//! [`Matcher::legacy`] it searches as `"undefined"` instead, so `def` matches
//! every record that lacks the field, as the first web release of the search
//! box did.

use crate::resolve::resolve;
use crate::value::{coerce_opt, is_container, UNDEFINED};
use crate::DEFAULT_DELIMITER;
use rayon::prelude::*;
use serde_json::Value;

/// Whether `needle` is an in-order character subsequence of `haystack`.
///
/// Both arguments are compared as-is; callers fold case beforehand. Each
/// needle character is taken at its earliest position after the previous
/// one, which is sufficient for a yes/no answer.
pub fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut remaining = haystack.chars();
    needle.chars().all(|c| remaining.any(|h| h == c))
}

/// A configured matcher: which fields to search and how paths are split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matcher {
    field_paths: Vec<String>,
    delimiter: String,
    legacy: bool,
}

impl Matcher {
    pub fn new<I, S>(field_paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            field_paths: field_paths.into_iter().map(Into::into).collect(),
            delimiter: DEFAULT_DELIMITER.to_string(),
            legacy: false,
        }
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Absent fields search as `"undefined"` rather than `""`.
    pub fn legacy(mut self, on: bool) -> Self {
        self.legacy = on;
        self
    }

    pub fn is_legacy(&self) -> bool {
        self.legacy
    }

    pub fn field_paths(&self) -> &[String] {
        &self.field_paths
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Return the records in `items` that match `query`, in input order.
    pub fn search<'a>(&self, query: &str, items: &'a [Value]) -> Vec<&'a Value> {
        let needle = query.to_lowercase();
        let matched: Vec<&Value> = items
            .iter()
            .filter(|item| self.matches_folded(&needle, item))
            .collect();
        tracing::debug!(
            query,
            total = items.len(),
            matched = matched.len(),
            "matcher: search"
        );
        matched
    }

    /// Same result as [`Matcher::search`], evaluating records on the rayon
    /// thread pool. Output order follows input order.
    pub fn search_par<'a>(&self, query: &str, items: &'a [Value]) -> Vec<&'a Value> {
        let needle = query.to_lowercase();
        let matched: Vec<&Value> = items
            .par_iter()
            .filter(|item| self.matches_folded(&needle, item))
            .collect();
        tracing::debug!(
            query,
            total = items.len(),
            matched = matched.len(),
            "matcher: parallel search"
        );
        matched
    }

    /// Whether a single record matches `query` on any configured field.
    pub fn matches(&self, query: &str, item: &Value) -> bool {
        self.matches_folded(&query.to_lowercase(), item)
    }

    fn matches_folded(&self, needle: &str, item: &Value) -> bool {
        self.field_paths.iter().any(|path| {
            // Scalar records search against themselves, whatever the path.
            let field = if is_container(item) {
                resolve(path, item, &self.delimiter)
            } else {
                Some(item)
            };
            let text = match field {
                None if self.legacy => UNDEFINED.to_string(),
                other => coerce_opt(other),
            };
            is_subsequence(needle, &text.to_lowercase())
        })
    }
}

/// Filter `items` by `query` over `field_paths` with the default delimiter.
///
/// ```
/// use serde_json::json;
/// use sift_core::matcher::search;
///
/// let fruit: Vec<_> = ["apple", "banana", "oranges", "avocado", "pineapple"]
///     .iter()
///     .map(|s| json!(s))
///     .collect();
/// let hits = search("app", &fruit, &[""]);
/// assert_eq!(hits, [&json!("apple"), &json!("pineapple")]);
/// ```
pub fn search<'a, S: AsRef<str>>(
    query: &str,
    items: &'a [Value],
    field_paths: &[S],
) -> Vec<&'a Value> {
    Matcher::new(field_paths.iter().map(|p| p.as_ref().to_string())).search(query, items)
}

/// Dynamically typed entry point for callers holding untyped JSON input.
///
/// Returns an empty result when `query` is not a string or `items` is not an
/// array.
pub fn search_value<'a, S: AsRef<str>>(
    query: &Value,
    items: &'a Value,
    field_paths: &[S],
) -> Vec<&'a Value> {
    match (query, items) {
        (Value::String(q), Value::Array(list)) => search(q, list, field_paths),
        _ => {
            tracing::debug!(
                query = crate::value::kind(query),
                items = crate::value::kind(items),
                "matcher: rejected non-string query or non-array items"
            );
            Vec::new()
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn fruit() -> Vec<Value> {
        ["apple", "banana", "oranges", "avocado", "pineapple"]
            .iter()
            .map(|s| json!(s))
            .collect()
    }

    fn books() -> Vec<Value> {
        vec![
            json!({"title": "Built To Last", "authors": ["Jim Collins", "Jerry I. Porras"], "genres": ["Business"]}),
            json!({"title": "Effective Python", "authors": ["Diomiddis Spinellis"], "genres": ["Motivational"]}),
            json!({"title": "Big Magic", "authors": ["Elizabeth Gilbert"], "genres": ["Motivational"], "isbn": 1294059930311u64}),
        ]
    }

    #[rstest]
    #[case("abc", "aXbXc", true)]
    #[case("abc", "abc", true)]
    #[case("abc", "acb", false)]
    #[case("aa", "a", false)]
    #[case("aa", "banana", true)]
    #[case("", "", true)]
    #[case("", "anything", true)]
    #[case("x", "", false)]
    fn subsequence_cases(#[case] needle: &str, #[case] haystack: &str, #[case] expected: bool) {
        assert_eq!(is_subsequence(needle, haystack), expected);
    }

    #[test]
    fn fruit_app() {
        let items = fruit();
        assert_eq!(search("app", &items, &[""]), vec![&items[0], &items[4]]);
    }

    #[test]
    fn case_insensitive() {
        let items = vec![json!("apple")];
        assert_eq!(search("APP", &items, &[""]).len(), 1);
        let items = vec![json!("APPLE")];
        assert_eq!(search("app", &items, &[""]).len(), 1);
    }

    #[test]
    fn no_match() {
        assert!(search("xyz", &[json!("apple")], &[""]).is_empty());
    }

    #[test]
    fn empty_query_is_identity() {
        let items = books();
        let hits = search("", &items, &["title"]);
        assert_eq!(hits, items.iter().collect::<Vec<_>>());
    }

    #[test]
    fn empty_field_list_matches_nothing() {
        let items = fruit();
        let none: [&str; 0] = [];
        assert!(search("", &items, &none).is_empty());
    }

    #[test]
    fn any_field_passes() {
        let items = books();
        // "gilbert" only appears in the authors of the last book.
        let hits = search("gilbert", &items, &["title", "authors"]);
        assert_eq!(hits, vec![&items[2]]);
        // ...and not at all when authors are not searched.
        assert!(search("gilbert", &items, &["title"]).is_empty());
    }

    #[test]
    fn array_fields_search_joined_text() {
        let items = books();
        // Subsequence spans the two author names: "Collins,Jerry".
        let hits = search("collinsjerry", &items, &["authors"]);
        assert_eq!(hits, vec![&items[0]]);
    }

    #[test]
    fn numeric_fields_are_coerced() {
        let items = books();
        assert_eq!(search("1294", &items, &["isbn"]), vec![&items[2]]);
    }

    #[test]
    fn missing_field_matches_only_empty_query() {
        let items = books();
        assert!(search("a", &items, &["publisher"]).is_empty());
        assert_eq!(search("", &items, &["publisher"]).len(), 3);
    }

    #[test]
    fn legacy_missing_field_searches_as_undefined() {
        let items = vec![json!({"title": "x"}), json!({"title": "y", "isbn": 1294059930311u64})];
        let clean = Matcher::new(["isbn"]);
        assert!(clean.search("def", &items).is_empty());

        let legacy = Matcher::new(["isbn"]).legacy(true);
        assert_eq!(legacy.search("def", &items), vec![&items[0]]);
        assert_eq!(legacy.search("DEF", &items), legacy.search_par("def", &items));
        // Present values are unaffected.
        assert_eq!(legacy.search("1294", &items), vec![&items[1]]);
    }

    #[test]
    fn scalar_items_ignore_path() {
        let items = vec![json!("apple"), json!(42), json!({"title": "apple pie"})];
        let hits = search("ap", &items, &["title"]);
        assert_eq!(hits, vec![&items[0], &items[2]]);
        assert_eq!(search("42", &items, &["title"]), vec![&items[1]]);
    }

    #[test]
    fn nested_paths_with_custom_delimiter() {
        let items = vec![json!({"user": {"name": "Edmond Lau"}}), json!({"user": {"name": "Eric Reiss"}})];
        let matcher = Matcher::new(["user/name"]).with_delimiter("/");
        assert_eq!(matcher.search("lau", &items), vec![&items[0]]);
    }

    #[test]
    fn parallel_matches_sequential() {
        let items = books();
        let matcher = Matcher::new(["title", "authors", "genres"]);
        for q in ["", "mo", "big", "zzz", "ePy"] {
            assert_eq!(matcher.search(q, &items), matcher.search_par(q, &items), "query {q:?}");
        }
    }

    #[test]
    fn input_is_untouched() {
        let items = books();
        let before = items.clone();
        let _ = search("e", &items, &["title"]);
        assert_eq!(items, before);
    }

    #[test]
    fn search_value_fails_closed() {
        let items = json!(["apple", "pineapple"]);
        assert!(search_value(&json!(5), &items, &[""]).is_empty());
        assert!(search_value(&json!("app"), &json!({"a": 1}), &[""]).is_empty());
        assert_eq!(search_value(&json!("app"), &items, &[""]).len(), 2);
    }
}
