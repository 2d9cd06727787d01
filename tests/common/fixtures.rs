//! Static record corpora used across harnesses.

use serde_json::{json, Value};

/// The five-book catalogue the search box ships with.
pub fn books() -> Vec<Value> {
    vec![
        json!({"title": "The Effective Engineer", "authors": ["Edmond Lau"], "genres": ["Motivational"], "status": "", "ratings": 4.0, "year_published": "2009"}),
        json!({"title": "Built To Last", "authors": ["Jim Collins", "Jerry I. Porras"], "genres": ["Business", "Entrepreneurship"], "status": "", "ratings": 4.0, "year_published": "2001"}),
        json!({"title": "Effective Python", "authors": ["Diomiddis Spinellis"], "genres": ["Motivational"], "status": "", "ratings": 4.0, "year_published": "2006"}),
        json!({"title": "The Lean Startup", "authors": ["Eric Reiss"], "genres": ["Motivational"], "isbn": 9245789930312u64, "status": "in_discussion", "ratings": 4.0, "year_published": "2005"}),
        json!({"title": "Big Magic", "authors": ["Elizabeth Gilbert"], "genres": ["Motivational"], "isbn": 1294059930311u64, "status": "in_discussion", "ratings": 4.0, "year_published": "2014"}),
    ]
}

/// Plain string records; scalars search against themselves.
pub const FRUIT: &[&str] = &["apple", "banana", "oranges", "avocado", "pineapple"];

pub fn fruit() -> Vec<Value> {
    FRUIT.iter().map(|s| json!(s)).collect()
}

/// Field paths the book catalogue is searched on.
pub const BOOK_FIELDS: &[&str] = &["title", "authors", "genres"];
