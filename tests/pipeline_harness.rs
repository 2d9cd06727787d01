#![allow(unused)]
//! Search pipeline integration harness.
//!
//! # What this covers
//!
//! - **End to end**: query → matched books → highlighted display lines, as the
//!   search box shows them, snapshotted with insta.
//! - **Config wiring**: a pipeline built from a `config.toml` on disk behaves
//!   like the hand-assembled one.
//! - **Scalars**: string collections display and highlight themselves.
//!
//! # Running
//!
//! ```sh
//! cargo test --test pipeline_harness
//! ```

mod common;
use common::*;

use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use serde_json::Value;
use sift_core::{config::Config, DisplayTemplate, Highlighter, Matcher, SearchPipeline};

fn lines(pipeline: &SearchPipeline, query: &str, items: &[Value]) -> String {
    pipeline
        .run(query, items)
        .iter()
        .map(|r| r.display_text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn substring_highlight_over_books() {
    let items = books();
    assert_snapshot!(lines(&book_pipeline(false), "eff", &items), @r"
    The <b>Eff</b>ective Engineer - Edmond Lau
    <b>Eff</b>ective Python - Diomiddis Spinellis
    ");
}

#[test]
fn per_character_highlight_over_books() {
    let items = books();
    assert_snapshot!(lines(&book_pipeline(true), "lst", &items), @r"
    Built To <b>L</b>a<b>s</b><b>t</b> - Jim Co<b>l</b><b>l</b>in<b>s</b>, Jerry I. Porra<b>s</b>
    The <b>L</b>ean <b>S</b><b>t</b>ar<b>t</b>up - Eric Rei<b>s</b><b>s</b>
    ");
}

#[test]
fn empty_query_lists_every_book_plainly() {
    let items = books();
    let results = book_pipeline(false).run("", &items);
    assert_eq!(results.len(), items.len());
    assert!(results.iter().all(|r| !r.display_text.contains("<b>")));
}

#[test]
fn pipeline_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[search]\nfield_paths = [\"authors\"]\n\n[highlight]\nstyle = \"italics\"\n\n[display]\nfields = [\"authors\", \"title\"]\nseparator = \" | \"\n",
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    let pipeline = SearchPipeline::from_config(&config);
    let items = books();

    // "eff" is in two titles but no author.
    assert!(pipeline.run("eff", &items).is_empty());
    assert_eq!(
        lines(&pipeline, "gilbert", &items),
        "Elizabeth <i>Gilbert</i> | Big Magic"
    );
}

#[test]
fn default_config_uses_custom_span() {
    let pipeline = SearchPipeline::from_config(&Config::defaults());
    let items = books();
    assert_eq!(
        lines(&pipeline, "magic", &items),
        r#"Big <span class="format-inline-x-custom">Magic</span> - Elizabeth Gilbert"#
    );
}

#[test]
fn scalar_collection() {
    let items = fruit();
    let pipeline = SearchPipeline::new(
        Matcher::new([""]),
        DisplayTemplate::default(),
        Highlighter::new("bold"),
    );
    assert_eq!(lines(&pipeline, "app", &items), "<b>app</b>le\npine<b>app</b>le");
}

#[test]
fn records_without_display_fields_still_match() {
    let items = vec![
        RecordBuilder::new().field("name", "Edmond Lau").build(),
        RecordBuilder::new().field("title", "Big Magic").build(),
    ];
    let pipeline = SearchPipeline::new(
        Matcher::new(["name", "title"]),
        DisplayTemplate::default(),
        Highlighter::new("bold"),
    );
    let results = pipeline.run("lau", &items);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].display_text, "");
}
