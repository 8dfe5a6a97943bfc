//! # Session list screen
//!
//! The start destination. A selectable list of sessions, sorted by start
//! time by the reducer. Enter emits [`SessionListEvent::Open`] with the
//! selected session's id; the host turns that into a navigate call to
//! the detail route. The component itself never touches the back-stack.
//!
//! Follows the persistent state + transient wrapper pattern:
//! `SessionListState` lives in `TuiState` so the selection survives tab
//! switches; `SessionList` is created each frame with borrowed state.

use chrono::{DateTime, Utc};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};

use unicode_width::UnicodeWidthStr;

use super::{pad_to_width, truncate_to_width};
use crate::core::state::App;
use crate::data::Session;
use crate::tui::event::TuiEvent;

/// Persistent state for the session list screen.
pub struct SessionListState {
    pub selected: usize,
    pub list_state: ListState,
}

impl SessionListState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            list_state: ListState::default(),
        }
    }

    /// Handle a key event, returning an event when the host should act.
    pub fn handle_event(
        &mut self,
        event: &TuiEvent,
        sessions: &[Session],
    ) -> Option<SessionListEvent> {
        if sessions.is_empty() {
            return None;
        }
        self.selected = self.selected.min(sessions.len() - 1);
        match event {
            TuiEvent::CursorUp | TuiEvent::ScrollUp => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown | TuiEvent::ScrollDown => {
                self.selected = (self.selected + 1).min(sessions.len() - 1);
                None
            }
            TuiEvent::Submit => Some(SessionListEvent::Open(
                sessions[self.selected].id.clone(),
            )),
            _ => None,
        }
    }
}

/// Events emitted by the session list.
#[derive(Debug, PartialEq, Eq)]
pub enum SessionListEvent {
    /// Open the detail view for this session id.
    Open(String),
}

/// Transient render wrapper.
pub struct SessionList<'a> {
    app: &'a App,
    state: &'a mut SessionListState,
}

impl<'a> SessionList<'a> {
    pub fn new(app: &'a App, state: &'a mut SessionListState) -> Self {
        Self { app, state }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::NONE)
            .padding(Padding::horizontal(1));

        if self.app.sessions.is_empty() {
            let text = if self.app.is_loading {
                "Loading sessions…"
            } else {
                "No sessions in this schedule."
            };
            let empty = Paragraph::new(text)
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        self.state.selected = self.state.selected.min(self.app.sessions.len() - 1);
        self.state.list_state.select(Some(self.state.selected));

        let inner_width = area.width.saturating_sub(2) as usize;
        let items: Vec<ListItem> = self
            .app
            .sessions
            .iter()
            .enumerate()
            .map(|(i, session)| {
                let time = format_time_range(session.starts_at, session.ends_at);
                let room = self.app.room_name(session).unwrap_or("");

                let fixed = time.width() + 2 + room.width() + 2;
                let title_width = inner_width.saturating_sub(fixed);
                let title = truncate_to_width(&session.title, title_width);
                let padded_title = pad_to_width(&title, title_width);

                let style = if i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Gray)
                };

                ListItem::new(Line::from(vec![
                    Span::styled(time, style),
                    Span::styled("  ", style),
                    Span::styled(padded_title, style),
                    Span::styled("  ", style),
                    Span::styled(room.to_string(), style),
                ]))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

/// Format a session's time slot as "Thu 09:00–09:45".
fn format_time_range(start: DateTime<Utc>, end: DateTime<Utc>) -> String {
    format!("{}–{}", start.format("%a %H:%M"), end.format("%H:%M"))
}
