//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic. All state changes go
//! through [`AppState::handle`], which never touches the terminal, so the
//! search box behaviour can be tested without one.

use crate::{
    event::{self, AppEvent, InputMode},
    search_box::{BoxEvent, SearchBox},
    theme::Theme,
    widgets::{
        help::HelpPopup,
        query_bar::{QueryBar, QueryBarState},
        result_list::{ResultList, ResultListState, ResultRow},
    },
};
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout},
    text::Line,
    widgets::Paragraph,
    Frame, Terminal,
};
use serde_json::Value;
use sift_core::{config::Config, SearchPipeline};
use std::{io, time::Duration};

// ---------------------------------------------------------------------------
// Focus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    QueryBar,
    Results,
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub records: Vec<Value>,
    pub pipeline: SearchPipeline,
    pub config: Config,
    pub theme: Theme,
    pub search_box: SearchBox,
    pub focus: Focus,
    pub query: QueryBarState,
    pub results: ResultListState,
    /// Last known terminal width, for the responsive placeholder.
    pub width: u16,
    /// Record picked with Enter, if any.
    pub chosen: Option<Value>,
    pub show_help: bool,
    pub quit: bool,
}

impl AppState {
    pub fn new(records: Vec<Value>, config: Config, theme: Theme) -> Self {
        let pipeline = SearchPipeline::from_config(&config);
        let mut state = AppState {
            records,
            pipeline,
            config,
            theme,
            search_box: SearchBox::new(),
            focus: Focus::Results,
            query: QueryBarState::default(),
            results: ResultListState::default(),
            width: 0,
            chosen: None,
            show_help: false,
            quit: false,
        };
        state.focus_query();
        state
    }

    /// Placeholder for the current terminal width.
    pub fn placeholder(&self) -> &str {
        self.config.ui.placeholder_for_width(self.width)
    }

    pub fn handle(&mut self, event: AppEvent) {
        // Help popup intercepts all events; only close keys pass through.
        if self.show_help {
            if matches!(event, AppEvent::Char('?') | AppEvent::Escape | AppEvent::Quit) {
                tracing::debug!("help popup closed");
                self.show_help = false;
            }
            return;
        }

        match event {
            AppEvent::Quit => {
                tracing::debug!("quit");
                self.quit = true;
            }

            AppEvent::Resize(w, _) => self.width = w,

            AppEvent::Char('?') if self.focus == Focus::Results => {
                tracing::debug!("help popup opened");
                self.show_help = true;
            }

            AppEvent::Char('m') if self.focus == Focus::Results => self.toggle_per_character(),

            AppEvent::QueryFocus => self.focus_query(),

            AppEvent::FocusNext => match self.focus {
                Focus::QueryBar => self.blur_query(),
                Focus::Results => self.focus_query(),
            },

            AppEvent::Escape => match self.focus {
                Focus::QueryBar => self.blur_query(),
                Focus::Results => {
                    self.search_box.apply(BoxEvent::Dismiss, self.query.query.is_empty());
                }
            },

            AppEvent::Enter if self.focus == Focus::QueryBar => self.submit(),

            AppEvent::Nav(dir) if self.focus == Focus::QueryBar => {
                use crate::event::Direction::*;
                match dir {
                    Up | Down => self.results.handle(&event),
                    Left | Right => {
                        self.query.handle(&event);
                    }
                }
            }

            AppEvent::Nav(_) | AppEvent::ScrollUp | AppEvent::ScrollDown => {
                self.results.handle(&event)
            }

            other if self.focus == Focus::QueryBar => {
                if self.query.handle(&other) {
                    self.search_box.apply(BoxEvent::Input, self.query.query.is_empty());
                    self.refresh_results();
                }
            }

            _ => {}
        }
    }

    fn input_mode(&self) -> InputMode {
        match self.focus {
            Focus::QueryBar => InputMode::Typing,
            Focus::Results => InputMode::Browse,
        }
    }

    fn focus_query(&mut self) {
        let event = if self.search_box.is_hidden() {
            BoxEvent::Reveal
        } else {
            BoxEvent::Focus
        };
        self.search_box.apply(event, self.query.query.is_empty());
        self.focus = Focus::QueryBar;
    }

    fn blur_query(&mut self) {
        self.search_box.apply(BoxEvent::Blur, self.query.query.is_empty());
        self.focus = Focus::Results;
    }

    fn submit(&mut self) {
        self.chosen = self.results.selected().map(|row| row.record.clone());
        tracing::debug!(query = %self.query.query, picked = self.chosen.is_some(), "search submitted");
        self.query.clear();
        self.search_box.apply(BoxEvent::Submit, true);
        self.results.set_rows(Vec::new());
    }

    fn toggle_per_character(&mut self) {
        self.config.highlight.per_character = !self.config.highlight.per_character;
        self.pipeline = SearchPipeline::from_config(&self.config);
        tracing::debug!(per_character = self.config.highlight.per_character, "highlight mode toggled");
        self.refresh_results();
    }

    /// Re-run the pipeline for the current query when results are showing.
    fn refresh_results(&mut self) {
        if !self.search_box.results_visible() {
            return;
        }
        let rows: Vec<ResultRow> = self
            .pipeline
            .run(&self.query.query, &self.records)
            .into_iter()
            .map(|r| ResultRow {
                record: r.record.clone(),
                display_text: r.display_text,
            })
            .collect();
        self.results.set_rows(rows);
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
}

impl App {
    pub fn new(records: Vec<Value>, config: Config, theme: Theme) -> Self {
        App {
            state: AppState::new(records, config, theme),
        }
    }

    /// Set up the terminal, run the event loop, and restore the terminal on
    /// exit. Returns the record picked with Enter, if any.
    pub fn run(mut self) -> anyhow::Result<Option<Value>> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;
        self.state.width = terminal.size()?.width;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result.map(|()| self.state.chosen)
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(16))? {
                match ct_event::read()? {
                    Event::Key(key) if key.kind == crossterm::event::KeyEventKind::Press => {
                        if let Some(ev) = event::translate(Event::Key(key), self.state.input_mode()) {
                            tracing::debug!(
                                focus = ?self.state.focus,
                                phase = ?self.state.search_box.phase(),
                                event = ?ev,
                                "key event"
                            );
                            self.state.handle(ev);
                        }
                    }
                    other => {
                        if let Some(ev) = event::translate(other, self.state.input_mode()) {
                            self.state.handle(ev);
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    if state.search_box.is_hidden() {
        let hint = Line::styled("press / to search", state.theme.search_placeholder);
        frame.render_widget(Paragraph::new(hint), area);
        return;
    }

    // Vertical: 3-line query bar | results popup
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([Constraint::Length(3), Constraint::Fill(1)])
        .split(area);

    let status = format!("{}/{}", state.results.rows.len(), state.records.len());
    let query_focused = state.focus == Focus::QueryBar;
    let bar = QueryBar::new(&state.query, query_focused, state.placeholder(), status, &state.theme);
    let cursor = bar.cursor_position(vert[0]);
    frame.render_widget(bar, vert[0]);

    if state.search_box.results_visible() {
        frame.render_widget(
            ResultList::new(&state.results, state.focus == Focus::Results, &state.theme),
            vert[1],
        );
    }

    if state.show_help {
        frame.render_widget(HelpPopup, area);
    }

    if query_focused {
        frame.set_cursor_position(cursor);
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
