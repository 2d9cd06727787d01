//! Key handling for the sift TUI.
//!
//! [`translate`] turns a crossterm [`Event`] into an [`AppEvent`]. What a
//! plain letter means depends on [`InputMode`]: while the search box has
//! focus every printable character is query text, otherwise a few letters
//! are shortcuts.
//!
//! | Key(s)               | Event             | Mode    |
//! |----------------------|-------------------|---------|
//! | `Ctrl+c`             | `Quit`            | both    |
//! | `q`                  | `Quit`            | browse  |
//! | `/`                  | `QueryFocus`      | browse  |
//! | `k` / `j`            | `Nav(Up / Down)`  | browse  |
//! | `Ctrl+u` / `Ctrl+d`  | `ScrollUp / Down` | browse  |
//! | arrows               | `Nav(..)`         | both    |
//! | `PageUp` / `PageDown`| `ScrollUp / Down` | both    |
//! | `Tab`                | `FocusNext`       | both    |

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Who receives plain characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// The result list has focus; letters may be shortcuts.
    Browse,
    /// The search box has focus; letters are query text.
    Typing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    /// Toggle focus between the search box and the result list.
    FocusNext,
    /// Focus the search box, revealing it if it was dismissed.
    QueryFocus,
    ScrollUp,
    ScrollDown,
    Nav(Direction),
    Char(char),
    Backspace,
    Enter,
    Escape,
    Resize(u16, u16),
}

pub fn translate(event: Event, mode: InputMode) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) => {
            let shortcut = match mode {
                InputMode::Browse => browse_shortcut(key),
                InputMode::Typing => None,
            };
            shortcut.or_else(|| common_key(key))
        }
        _ => None,
    }
}

fn browse_shortcut(key: KeyEvent) -> Option<AppEvent> {
    let event = match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('q')) => AppEvent::Quit,
        (KeyModifiers::NONE, KeyCode::Char('/')) => AppEvent::QueryFocus,
        (KeyModifiers::NONE, KeyCode::Char('k')) => AppEvent::Nav(Direction::Up),
        (KeyModifiers::NONE, KeyCode::Char('j')) => AppEvent::Nav(Direction::Down),
        (KeyModifiers::CONTROL, KeyCode::Char('u')) => AppEvent::ScrollUp,
        (KeyModifiers::CONTROL, KeyCode::Char('d')) => AppEvent::ScrollDown,
        _ => return None,
    };
    Some(event)
}

fn common_key(key: KeyEvent) -> Option<AppEvent> {
    let plain = key.modifiers == KeyModifiers::NONE;
    let event = match key.code {
        KeyCode::Char('c') if key.modifiers == KeyModifiers::CONTROL => AppEvent::Quit,
        KeyCode::Char(c) if plain || key.modifiers == KeyModifiers::SHIFT => AppEvent::Char(c),
        KeyCode::Up => AppEvent::Nav(Direction::Up),
        KeyCode::Down => AppEvent::Nav(Direction::Down),
        KeyCode::Left => AppEvent::Nav(Direction::Left),
        KeyCode::Right => AppEvent::Nav(Direction::Right),
        KeyCode::PageUp => AppEvent::ScrollUp,
        KeyCode::PageDown => AppEvent::ScrollDown,
        KeyCode::Tab if plain => AppEvent::FocusNext,
        KeyCode::Backspace if plain => AppEvent::Backspace,
        KeyCode::Enter if plain => AppEvent::Enter,
        KeyCode::Esc => AppEvent::Escape,
        _ => return None,
    };
    Some(event)
}
