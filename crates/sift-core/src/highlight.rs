//! Highlight formatter — wraps matched spans of a display string in markers.
//!
//! Two modes:
//!
//! - **Substring** (default): every case-insensitive occurrence of the whole
//!   query is wrapped, keeping the text's original case.
//!   `"sanders pepper"` / `"san"` → `"<b>san</b>ders pepper"`.
//! - **Per-character**: every text character that case-insensitively equals
//!   any query character is wrapped in its own marker pair.
//!   `"abc"` / `"ab"` → `"<b>a</b><b>b</b>c"`.
//!
//! Markers come from a closed vocabulary selected by a style key (see
//! [`MarkerPair::for_key`]). The formatter does not escape `text`; the
//! renderer that consumes the output owns that.
//!
//! # Legacy behaviour
//!
//! [`Highlighter::legacy`] restores the behaviour of the first web release
//! of the search box. Substring mode then compiles the raw query as a pattern, so
//! metacharacters keep their pattern meaning. Per-character mode runs one
//! replace pass per query character over the output of the previous pass.
//! Each character is compiled as a pattern of its own (`.` matches anything),
//! matches immediately followed by `<` are skipped, and the *query's*
//! character is inserted. Those passes can wrap characters inside markers
//! inserted by earlier passes, so the output depends on query order and is
//! not idempotent. In both modes a query that is not a valid pattern yields
//! `None`.

use regex::{Captures, Regex, RegexBuilder};
use serde_json::Value;

/// Style key for `<b>…</b>`.
pub const STYLE_BOLD: &str = "bold";
/// Style key for `<i>…</i>`.
pub const STYLE_ITALICS: &str = "italics";
/// Style key for the inline span understood by the page stylesheet.
pub const STYLE_CUSTOM: &str = "format-inline-x-custom";

/// Opening and closing marker inserted around a matched span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerPair {
    pub open: &'static str,
    pub close: &'static str,
}

impl MarkerPair {
    pub const BOLD: MarkerPair = MarkerPair { open: "<b>", close: "</b>" };
    pub const ITALICS: MarkerPair = MarkerPair { open: "<i>", close: "</i>" };
    pub const CUSTOM: MarkerPair = MarkerPair {
        open: "<span class=\"format-inline-x-custom\">",
        close: "</span>",
    };
    /// Inserts nothing; used for unrecognised style keys.
    pub const EMPTY: MarkerPair = MarkerPair { open: "", close: "" };

    /// Every non-empty pair in the vocabulary.
    pub const ALL: [MarkerPair; 3] = [Self::BOLD, Self::ITALICS, Self::CUSTOM];

    /// Look up the marker pair for a style key. Unknown keys map to
    /// [`MarkerPair::EMPTY`].
    pub fn for_key(key: &str) -> Self {
        match key {
            STYLE_ITALICS => Self::ITALICS,
            STYLE_BOLD => Self::BOLD,
            STYLE_CUSTOM => Self::CUSTOM,
            _ => Self::EMPTY,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty() && self.close.is_empty()
    }

    pub fn wrap(&self, span: &str) -> String {
        format!("{}{}{}", self.open, span, self.close)
    }

    fn push_wrapped(&self, out: &mut String, c: char) {
        out.push_str(self.open);
        out.push(c);
        out.push_str(self.close);
    }
}

/// A configured formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlighter {
    markers: MarkerPair,
    per_character: bool,
    legacy: bool,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::with_markers(MarkerPair::BOLD)
    }
}

impl Highlighter {
    /// Formatter for a style key; unknown keys wrap with empty markers.
    pub fn new(style_key: &str) -> Self {
        let markers = MarkerPair::for_key(style_key);
        if markers.is_empty() {
            tracing::warn!(style_key, "highlight: unknown style key, markers will be empty");
        }
        Self::with_markers(markers)
    }

    pub fn with_markers(markers: MarkerPair) -> Self {
        Self {
            markers,
            per_character: false,
            legacy: false,
        }
    }

    pub fn per_character(mut self, on: bool) -> Self {
        self.per_character = on;
        self
    }

    pub fn legacy(mut self, on: bool) -> Self {
        self.legacy = on;
        self
    }

    pub fn markers(&self) -> MarkerPair {
        self.markers
    }

    pub fn is_per_character(&self) -> bool {
        self.per_character
    }

    pub fn is_legacy(&self) -> bool {
        self.legacy
    }

    /// Wrap the spans of `text` matched by `query`.
    ///
    /// Returns `None` only in legacy mode when `query` (or, per character,
    /// one of its characters) is not a valid pattern.
    pub fn apply(&self, text: &str, query: &str) -> Option<String> {
        match (self.per_character, self.legacy) {
            (false, false) => self.wrap_pattern(text, &regex::escape(query)),
            (false, true) => self.wrap_pattern(text, query),
            (true, false) => Some(self.wrap_each_char(text, query)),
            (true, true) => self.wrap_each_char_in_passes(text, query),
        }
    }

    fn wrap_pattern(&self, text: &str, pattern: &str) -> Option<String> {
        if pattern.is_empty() {
            return Some(text.to_string());
        }
        let re = compile(pattern)?;
        let replaced = re.replace_all(text, |caps: &Captures| {
            let matched = &caps[0];
            if matched.is_empty() {
                String::new()
            } else {
                self.markers.wrap(matched)
            }
        });
        Some(replaced.into_owned())
    }

    /// One pass over `text`: each character equal to some query character
    /// gets its own marker pair.
    fn wrap_each_char(&self, text: &str, query: &str) -> String {
        let mut wanted: Vec<char> = Vec::new();
        for q in query.chars() {
            if !wanted.iter().any(|&w| same_ignore_case(w, q)) {
                wanted.push(q);
            }
        }

        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            if wanted.iter().any(|&w| same_ignore_case(w, c)) {
                self.markers.push_wrapped(&mut out, c);
            } else {
                out.push(c);
            }
        }
        out
    }

    /// One pass per query character, each over the previous pass's output.
    fn wrap_each_char_in_passes(&self, text: &str, query: &str) -> Option<String> {
        let mut current = text.to_string();
        for q in query.chars() {
            let re = compile(q.encode_utf8(&mut [0; 4]))?;
            let mut next = String::with_capacity(current.len());
            let mut last = 0;
            for m in re.find_iter(&current) {
                // Stands in for a `(?!<)` lookahead.
                if current[m.end()..].starts_with('<') {
                    continue;
                }
                next.push_str(&current[last..m.start()]);
                self.markers.push_wrapped(&mut next, q);
                last = m.end();
            }
            next.push_str(&current[last..]);
            current = next;
        }
        Some(current)
    }
}

/// Case-insensitive pattern, or `None` with a warning when it does not parse.
fn compile(pattern: &str) -> Option<Regex> {
    match RegexBuilder::new(pattern).case_insensitive(true).build() {
        Ok(re) => Some(re),
        Err(err) => {
            tracing::warn!(pattern, error = %err, "highlight: query is not a valid pattern");
            None
        }
    }
}

fn same_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Highlight `query` in `text` with the markers for `style_key`.
///
/// ```
/// use sift_core::highlight::format;
///
/// assert_eq!(
///     format("sanders pepper", "san", "bold", false).as_deref(),
///     Some("<b>san</b>ders pepper")
/// );
/// ```
pub fn format(text: &str, query: &str, style_key: &str, per_character: bool) -> Option<String> {
    Highlighter::new(style_key)
        .per_character(per_character)
        .apply(text, query)
}

/// Dynamically typed entry point: `None` unless both `text` and `query` are
/// JSON strings.
pub fn format_value(
    text: &Value,
    query: &Value,
    style_key: &str,
    per_character: bool,
) -> Option<String> {
    match (text, query) {
        (Value::String(t), Value::String(q)) => format(t, q, style_key, per_character),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
