//! Colour themes for the sift TUI. Both themes ship inside the binary as
//! TOML and are read through the `config` crate like the search settings.

use config::{Config, File, FileFormat};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

/// Embedded themes and the names `--theme` accepts for each. The first is the fallback.
const EMBEDDED: &[(&[&str], &str)] = &[
    (&["default"], include_str!("themes/default.toml")),
    (
        &["gruvbox-dark", "gruvbox_dark", "gruvbox"],
        include_str!("themes/gruvbox_dark.toml"),
    ),
];

/// One style entry as written in a theme file. Colours use ratatui's own
/// names (`dark_gray`, `lightcyan`, ...), `#rrggbb`, or a 0-255 index;
/// an unrecognised colour leaves that channel unset.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawStyle {
    fg: Option<String>,
    bg: Option<String>,
    bold: bool,
    dim: bool,
    italic: bool,
    underlined: bool,
}

impl From<RawStyle> for Style {
    fn from(raw: RawStyle) -> Style {
        let modifier = [
            (raw.bold, Modifier::BOLD),
            (raw.dim, Modifier::DIM),
            (raw.italic, Modifier::ITALIC),
            (raw.underlined, Modifier::UNDERLINED),
        ]
        .into_iter()
        .filter(|(on, _)| *on)
        .fold(Modifier::empty(), |acc, (_, m)| acc | m);

        Style {
            fg: raw.fg.as_deref().and_then(color),
            bg: raw.bg.as_deref().and_then(color),
            ..Style::default().add_modifier(modifier)
        }
    }
}

fn color(name: &str) -> Option<Color> {
    name.parse().ok()
}

#[derive(Debug, Deserialize)]
struct RawBorders {
    focused: RawStyle,
    unfocused: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawSearch {
    highlight: RawStyle,
    placeholder: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawResults {
    text: RawStyle,
    selected: RawStyle,
    empty: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawTheme {
    borders: RawBorders,
    search: RawSearch,
    results: RawResults,
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub border_focused: Style,
    pub border_unfocused: Style,

    /// Applied to spans the highlighter wrapped in markers.
    pub search_highlight: Style,
    /// Placeholder text in an empty search box.
    pub search_placeholder: Style,

    pub result_text: Style,
    pub result_selected: Style,
    /// The "no matches" line.
    pub result_empty: Style,
}

impl Theme {
    pub fn load_default() -> Self {
        Self::by_name("default")
    }

    /// An embedded theme by name, case-insensitive; unknown names get the default.
    pub fn by_name(name: &str) -> Self {
        let name = name.to_ascii_lowercase();
        let (_, src) = EMBEDDED
            .iter()
            .find(|(names, _)| names.contains(&name.as_str()))
            .unwrap_or(&EMBEDDED[0]);
        Self::from_toml_str(src).expect("embedded themes are valid TOML")
    }

    /// Parse a theme from a TOML string.
    pub fn from_toml_str(src: &str) -> anyhow::Result<Self> {
        let raw: RawTheme = Config::builder()
            .add_source(File::from_str(src, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        Ok(Self {
            border_focused: raw.borders.focused.into(),
            border_unfocused: raw.borders.unfocused.into(),
            search_highlight: raw.search.highlight.into(),
            search_placeholder: raw.search.placeholder.into(),
            result_text: raw.results.text.into(),
            result_selected: raw.results.selected.into(),
            result_empty: raw.results.empty.into(),
        })
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            self.border_focused
        } else {
            self.border_unfocused
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
