//! sift TUI — search-as-you-type over a record collection.

pub mod app;
pub mod event;
pub mod markup;
pub mod search_box;
pub mod theme;
pub mod widgets;

pub use app::App;

use serde_json::{json, Value};
use sift_core::config::Config;

/// Start the TUI over `records`. Returns the record picked with Enter, if any.
pub fn run(records: Vec<Value>, config: Config, theme: theme::Theme) -> anyhow::Result<Option<Value>> {
    tracing::info!(records = records.len(), style = %config.highlight.style, "starting tui");
    App::new(records, config, theme).run()
}

/// The small book catalogue searched when no records file is given.
pub fn demo_records() -> Vec<Value> {
    vec![
        json!({
            "title": "The Effective Engineer",
            "authors": ["Edmond Lau"],
            "genres": ["Motivational"],
            "status": "",
            "ratings": 4.0,
            "year_published": "2009",
            "likes_count": 10,
            "used_count": 31
        }),
        json!({
            "title": "Built To Last",
            "authors": ["Jim Collins", "Jerry I. Porras"],
            "genres": ["Business", "Entrepreneurship"],
            "status": "",
            "ratings": 4.0,
            "year_published": "2001",
            "likes_count": 29,
            "used_count": 31
        }),
        json!({
            "title": "Effective Python",
            "authors": ["Diomiddis Spinellis"],
            "genres": ["Motivational"],
            "status": "",
            "ratings": 4.0,
            "year_published": "2006",
            "likes_count": 29,
            "used_count": 31
        }),
        json!({
            "title": "The Lean Startup",
            "authors": ["Eric Reiss"],
            "genres": ["Motivational"],
            "isbn": 9245789930312u64,
            "status": "in_discussion",
            "ratings": 4.0,
            "year_published": "2005",
            "likes_count": 29,
            "used_count": 31
        }),
        json!({
            "title": "Big Magic",
            "authors": ["Elizabeth Gilbert"],
            "genres": ["Motivational"],
            "isbn": 1294059930311u64,
            "status": "in_discussion",
            "ratings": 4.0,
            "year_published": "2014",
            "likes_count": 29,
            "used_count": 31
        }),
    ]
}
