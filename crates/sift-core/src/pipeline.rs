//! Search pipeline — query + collection → matched records → highlighted text.
//!
//! [`SearchPipeline::run`] filters the collection with a [`Matcher`], builds
//! a display string per matched record with a [`DisplayTemplate`], and wraps
//! the query's matches in that string with a [`Highlighter`]. Results keep the
//! collection's order.

use crate::config::Config;
use crate::highlight::Highlighter;
use crate::matcher::Matcher;
use crate::resolve::resolve;
use crate::value::{self, is_container};
use crate::DEFAULT_DELIMITER;
use serde_json::Value;

/// One matched record and its highlighted display string.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<'a> {
    pub record: &'a Value,
    pub display_text: String,
}

/// How a matched record is turned into a single display line.
///
/// Each field is resolved and rendered (lists joined by `list_separator`);
/// absent fields are skipped and the rest are joined by `separator`. With the
/// defaults a book renders as `Built To Last - Jim Collins, Jerry I. Porras`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayTemplate {
    pub fields: Vec<String>,
    pub separator: String,
    pub list_separator: String,
    pub delimiter: String,
}

impl Default for DisplayTemplate {
    fn default() -> Self {
        Self {
            fields: vec!["title".to_string(), "authors".to_string()],
            separator: " - ".to_string(),
            list_separator: ", ".to_string(),
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }
}

impl DisplayTemplate {
    pub fn render(&self, record: &Value) -> String {
        if !is_container(record) {
            return value::display(record, &self.list_separator);
        }
        self.fields
            .iter()
            .filter_map(|field| resolve(field, record, &self.delimiter))
            .map(|v| value::display(v, &self.list_separator))
            .collect::<Vec<_>>()
            .join(&self.separator)
    }
}

#[derive(Debug, Clone)]
pub struct SearchPipeline {
    matcher: Matcher,
    display: DisplayTemplate,
    highlighter: Highlighter,
    parallel: bool,
}

impl SearchPipeline {
    pub fn new(matcher: Matcher, display: DisplayTemplate, highlighter: Highlighter) -> Self {
        Self {
            matcher,
            display,
            highlighter,
            parallel: false,
        }
    }

    /// Build a pipeline from the `[search]`, `[display]` and `[highlight]`
    /// sections of a [`Config`].
    pub fn from_config(config: &Config) -> Self {
        let matcher = Matcher::new(config.search.field_paths.iter().cloned())
            .with_delimiter(config.search.delimiter.clone())
            .legacy(config.highlight.legacy);
        let display = DisplayTemplate {
            fields: config.display.fields.clone(),
            separator: config.display.separator.clone(),
            list_separator: config.display.list_separator.clone(),
            delimiter: config.search.delimiter.clone(),
        };
        let highlighter = Highlighter::new(&config.highlight.style)
            .per_character(config.highlight.per_character)
            .legacy(config.highlight.legacy);
        Self::new(matcher, display, highlighter).parallel(config.search.parallel)
    }

    /// Evaluate records on the rayon pool. Results are identical.
    pub fn parallel(mut self, on: bool) -> Self {
        self.parallel = on;
        self
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    pub fn display(&self) -> &DisplayTemplate {
        &self.display
    }

    pub fn highlighter(&self) -> &Highlighter {
        &self.highlighter
    }

    /// Run `query` over `collection`.
    ///
    /// When highlighting yields no value (an invalid legacy pattern) the plain
    /// display string is used.
    pub fn run<'a>(&self, query: &str, collection: &'a [Value]) -> Vec<SearchResult<'a>> {
        let matched = if self.parallel {
            self.matcher.search_par(query, collection)
        } else {
            self.matcher.search(query, collection)
        };

        matched
            .into_iter()
            .map(|record| {
                let plain = self.display.render(record);
                let display_text = match self.highlighter.apply(&plain, query) {
                    Some(text) => text,
                    None => plain,
                };
                SearchResult {
                    record,
                    display_text,
                }
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
