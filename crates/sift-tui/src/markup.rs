//! Marker parsing: turns highlighted display strings into styled spans.
//!
//! The core wraps matched spans in markers from a closed vocabulary
//! ([`MarkerPair::ALL`]). This module recognises exactly those pairs and
//! renders their contents with the theme's highlight style. Anything else,
//! including stray `<`, is shown verbatim: the terminal is the display
//! surface, so there is nothing to escape.

use ratatui::{
    style::Style,
    text::{Line, Span},
};
use sift_core::MarkerPair;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Plain(&'a str),
    Marked(&'a str),
}

/// Split `text` into plain and marked segments.
///
/// An opening marker only counts when its matching closing marker follows;
/// otherwise it is plain text. Empty marked spans are dropped.
pub fn segments(text: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut plain_start = 0;
    let mut pos = 0;

    while pos < text.len() {
        let rest = &text[pos..];
        let pair = MarkerPair::ALL.iter().find_map(|m| {
            let after = rest.strip_prefix(m.open)?;
            let inner_len = after.find(m.close)?;
            Some((m.open.len(), inner_len, m.close.len()))
        });

        match pair {
            Some((open_len, inner_len, close_len)) => {
                if plain_start < pos {
                    out.push(Segment::Plain(&text[plain_start..pos]));
                }
                let inner_start = pos + open_len;
                if inner_len > 0 {
                    out.push(Segment::Marked(&text[inner_start..inner_start + inner_len]));
                }
                pos = inner_start + inner_len + close_len;
                plain_start = pos;
            }
            None => pos += rest.chars().next().map_or(1, char::len_utf8),
        }
    }

    if plain_start < text.len() {
        out.push(Segment::Plain(&text[plain_start..]));
    }
    out
}

/// Render a highlighted display string as a styled [`Line`].
pub fn to_line(text: &str, base: Style, highlight: Style) -> Line<'static> {
    let spans: Vec<Span<'static>> = segments(text)
        .into_iter()
        .map(|seg| match seg {
            Segment::Plain(s) => Span::styled(s.to_string(), base),
            Segment::Marked(s) => Span::styled(s.to_string(), base.patch(highlight)),
        })
        .collect();
    Line::from(spans)
}

/// The text with every recognised marker removed.
pub fn strip(text: &str) -> String {
    segments(text)
        .into_iter()
        .map(|seg| match seg {
            Segment::Plain(s) | Segment::Marked(s) => s,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
