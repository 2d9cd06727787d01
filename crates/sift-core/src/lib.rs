//! sift-core — record search and match highlighting.
//!
//! This crate exposes the pipeline stages as public modules, plus the
//! configuration and record-loading helpers used by the front ends.
//!
//! # Architecture
//!
//! ```text
//! resolve ──► matcher ──┐
//!                       ├──► pipeline ──► display text
//!            highlight ─┘
//! ```
//!
//! Every stage is synchronous and pure over its inputs. Records are borrowed,
//! never mutated; invalid input yields `None` or an empty result rather than
//! an error.

pub mod config;
pub mod error;
pub mod highlight;
pub mod matcher;
pub mod pipeline;
pub mod records;
pub mod resolve;
pub mod value;

pub use error::{Result, SiftError};
pub use highlight::{format, Highlighter, MarkerPair};
pub use matcher::{search, Matcher};
pub use pipeline::{DisplayTemplate, SearchPipeline, SearchResult};
pub use resolve::resolve;

/// A searchable record. Any JSON value: objects and arrays are walked by
/// field path, scalars search against themselves.
pub type Record = serde_json::Value;

/// Default separator between segments of a field path.
pub const DEFAULT_DELIMITER: &str = ".";
