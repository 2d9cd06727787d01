//! Search box state machine.
//!
//! The search box is either hidden (`Dismissed`), visible but idle, focused
//! with no results popup yet, or showing results. Transitions are driven by
//! [`BoxEvent`]s the app shell derives from key presses; the phase decides
//! whether the results popup is drawn and whether the pipeline runs.
//!
//! | From          | Event    | To                                        |
//! |---------------|----------|-------------------------------------------|
//! | `Idle`        | `Focus`  | `Focused`                                 |
//! | `Idle`        | `Reveal` | `Focused`                                 |
//! | `Focused`     | `Input`  | `ResultsOpen`                             |
//! | `Focused`     | `Blur`   | `Idle`                                    |
//! | `ResultsOpen` | `Input`  | `ResultsOpen`                             |
//! | `ResultsOpen` | `Blur`   | `Idle` if the query is empty, else stays  |
//! | `Focused`, `ResultsOpen` | `Submit` | `Focused` (query is cleared)   |
//! | any visible   | `Dismiss`| `Dismissed`                               |
//! | `Dismissed`   | `Reveal` | `ResultsOpen` if a query remains, else `Focused` |
//!
//! Every other pair leaves the phase unchanged.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Visible, unfocused, no popup.
    #[default]
    Idle,
    /// Focused; the popup opens on the first edit.
    Focused,
    /// The results popup is visible.
    ResultsOpen,
    /// The search bar is hidden.
    Dismissed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxEvent {
    Focus,
    Blur,
    /// The query text changed.
    Input,
    /// The query was submitted and cleared.
    Submit,
    /// Hide the search bar.
    Dismiss,
    /// Show the search bar again and focus it.
    Reveal,
}

#[derive(Debug, Default)]
pub struct SearchBox {
    phase: Phase,
}

impl SearchBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn results_visible(&self) -> bool {
        self.phase == Phase::ResultsOpen
    }

    pub fn is_hidden(&self) -> bool {
        self.phase == Phase::Dismissed
    }

    /// Apply `event` and return the new phase. `query_empty` is whether the
    /// query text is empty *after* the event's edit, if any.
    pub fn apply(&mut self, event: BoxEvent, query_empty: bool) -> Phase {
        use BoxEvent::*;
        use Phase::*;

        let next = match (self.phase, event) {
            (Idle, Focus | Reveal) => Focused,
            (Focused | ResultsOpen, Input) => ResultsOpen,
            (Focused, Blur) => Idle,
            (ResultsOpen, Blur) if query_empty => Idle,
            (Focused | ResultsOpen, Submit) => Focused,
            (Idle | Focused | ResultsOpen, Dismiss) => Dismissed,
            (Dismissed, Reveal) if query_empty => Focused,
            (Dismissed, Reveal) => ResultsOpen,
            (current, _) => current,
        };

        if next != self.phase {
            tracing::debug!(from = ?self.phase, to = ?next, event = ?event, "search box transition");
        }
        self.phase = next;
        next
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
