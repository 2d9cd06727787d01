#![allow(unused)]
//! Matcher integration harness.
//!
//! # What this covers
//!
//! - **Subsequence semantics**: a query matches a field when its characters
//!   appear in order, gaps allowed, ignoring case.
//! - **Any-field rule**: a record passes when at least one field path matches,
//!   including nested paths, array indices and list-valued fields.
//! - **Order preservation**: results are the input with non-matches removed.
//! - **Properties** (proptest): results are an order-preserving subset of the
//!   input; an empty query is the identity; case never changes the answer;
//!   the rayon path agrees with the sequential one.
//!
//! # Running
//!
//! ```sh
//! cargo test --test search_harness
//! ```

mod common;
use common::*;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use serde_json::{json, Value};
use sift_core::matcher::{is_subsequence, search, search_value, Matcher};

fn titles<'a>(hits: &[&'a Value]) -> Vec<&'a str> {
    hits.iter().filter_map(|r| r["title"].as_str()).collect()
}

// ---------------------------------------------------------------------------
// Books
// ---------------------------------------------------------------------------

#[rstest]
#[case("eff", &["The Effective Engineer", "Effective Python"])]
#[case("EFF", &["The Effective Engineer", "Effective Python"])]
#[case("magic", &["Big Magic"])]
#[case("porras", &["Built To Last"])]
#[case("entre", &["Built To Last"])]
#[case("motiv", &["The Effective Engineer", "Effective Python", "The Lean Startup", "Big Magic"])]
#[case("zzz", &[])]
fn book_queries(#[case] query: &str, #[case] expected: &[&str]) {
    let items = books();
    let hits = search(query, &items, BOOK_FIELDS);
    assert_eq!(titles(&hits), expected);
}

#[test]
fn list_fields_match_across_elements() {
    // The author list coerces to "Jim Collins,Jerry I. Porras".
    let items = books();
    let hits = search("jimjerry", &items, &["authors"]);
    assert_eq!(titles(&hits), ["Built To Last"]);
}

#[test]
fn non_searched_fields_are_ignored() {
    let items = books();
    assert!(search("in_discussion", &items, BOOK_FIELDS).is_empty());
    assert_eq!(search("in_discussion", &items, &["status"]).len(), 2);
}

#[test]
fn numeric_fields_are_searchable() {
    let items = books();
    let hits = search("2014", &items, &["year_published", "isbn"]);
    assert_eq!(titles(&hits), ["Big Magic"]);

    let hits = search("9930311", &items, &["isbn"]);
    assert_eq!(titles(&hits), ["Big Magic"]);
}

#[test]
fn nested_and_indexed_paths() {
    let items = vec![
        RecordBuilder::new()
            .field("name", "first")
            .field("meta", json!({"tags": ["alpha", "beta"]}))
            .build(),
        RecordBuilder::new()
            .field("name", "second")
            .field("meta", json!({"tags": ["gamma"]}))
            .build(),
    ];
    let hits = search("bet", &items, &["meta.tags.1"]);
    assert_eq!(hits, [&items[0]]);

    let hits = Matcher::new(["meta/tags"]).with_delimiter("/").search("gam", &items);
    assert_eq!(hits, [&items[1]]);
}

#[test]
fn unresolvable_paths_never_match_non_empty_queries() {
    let items = books();
    assert!(search("a", &items, &["publisher.name"]).is_empty());
    // An empty query matches even a missing field.
    assert_eq!(search("", &items, &["publisher.name"]).len(), items.len());
}

#[test]
fn empty_field_paths_match_nothing() {
    let items = books();
    let none: &[&str] = &[];
    assert!(search("eff", &items, none).is_empty());
}

// ---------------------------------------------------------------------------
// Scalars
// ---------------------------------------------------------------------------

#[test]
fn fruit_app() {
    let items = fruit();
    assert_eq!(search("app", &items, &[""]), [&items[0], &items[4]]);
}

#[test]
fn fruit_vowels_in_order() {
    let items = fruit();
    // a…o…a: "avocado" only.
    assert_eq!(search("aoa", &items, &[""]), [&items[3]]);
}

#[test]
fn untyped_inputs_fail_closed() {
    let items = json!(FRUIT);
    assert_eq!(search_value(&json!("app"), &items, &[""]).len(), 2);
    assert!(search_value(&json!(42), &items, &[""]).is_empty());
    assert!(search_value(&json!("app"), &json!({"a": "apple"}), &[""]).is_empty());
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

fn word_records() -> impl Strategy<Value = Vec<Value>> {
    prop::collection::vec("[a-zA-Z ]{0,12}", 0..24)
        .prop_map(|words| words.into_iter().map(|w| json!({ "name": w })).collect())
}

proptest! {
    #[test]
    fn results_are_order_preserving_subset(items in word_records(), query in "[a-z]{0,3}") {
        let hits = search(&query, &items, &["name"]);
        assert_order_preserving_subset!(hits, items);
    }

    #[test]
    fn every_hit_contains_the_query_as_subsequence(items in word_records(), query in "[a-z]{1,3}") {
        for hit in search(&query, &items, &["name"]) {
            let name = hit["name"].as_str().unwrap().to_lowercase();
            prop_assert!(is_subsequence(&query, &name));
        }
    }

    #[test]
    fn empty_query_is_identity(items in word_records()) {
        let hits = search("", &items, &["name"]);
        prop_assert_eq!(hits.len(), items.len());
    }

    #[test]
    fn query_case_is_irrelevant(items in word_records(), query in "[a-z]{0,3}") {
        let lower = search(&query, &items, &["name"]);
        let upper = search(&query.to_uppercase(), &items, &["name"]);
        prop_assert_eq!(lower, upper);
    }

    #[test]
    fn parallel_agrees_with_sequential(items in word_records(), query in "[a-z]{0,2}") {
        let matcher = Matcher::new(["name"]);
        prop_assert_eq!(matcher.search_par(&query, &items), matcher.search(&query, &items));
    }
}
