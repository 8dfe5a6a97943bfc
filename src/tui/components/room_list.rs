//! # Room list screen
//!
//! Read-only scrollable list of rooms with capacity and a count of the
//! sessions scheduled in each.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};

use crate::core::state::App;
use crate::tui::event::TuiEvent;

pub struct RoomListState {
    pub selected: usize,
    pub list_state: ListState,
}

impl RoomListState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            list_state: ListState::default(),
        }
    }

    pub fn handle_event(&mut self, event: &TuiEvent, len: usize) {
        if len == 0 {
            return;
        }
        self.selected = self.selected.min(len - 1);
        match event {
            TuiEvent::CursorUp | TuiEvent::ScrollUp => {
                self.selected = self.selected.saturating_sub(1);
            }
            TuiEvent::CursorDown | TuiEvent::ScrollDown => {
                self.selected = (self.selected + 1).min(len - 1);
            }
            _ => {}
        }
    }
}

pub struct RoomList<'a> {
    app: &'a App,
    state: &'a mut RoomListState,
}

impl<'a> RoomList<'a> {
    pub fn new(app: &'a App, state: &'a mut RoomListState) -> Self {
        Self { app, state }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::NONE)
            .padding(Padding::horizontal(1));

        if self.app.rooms.is_empty() {
            let text = if self.app.is_loading {
                "Loading rooms…"
            } else {
                "No rooms in this schedule."
            };
            let empty = Paragraph::new(text)
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        self.state.selected = self.state.selected.min(self.app.rooms.len() - 1);
        self.state.list_state.select(Some(self.state.selected));

        let items: Vec<ListItem> = self
            .app
            .rooms
            .iter()
            .enumerate()
            .map(|(i, room)| {
                let session_count = self
                    .app
                    .sessions
                    .iter()
                    .filter(|s| s.room_id.as_deref() == Some(room.id.as_str()))
                    .count();
                let mut detail = format!("{session_count} sessions");
                if let Some(capacity) = room.capacity {
                    detail = format!("{detail} · seats {capacity}");
                }

                let style = if i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Gray)
                };

                ListItem::new(Line::from(vec![
                    Span::styled(room.name.clone(), style),
                    Span::styled("  ", style),
                    Span::styled(detail, style.add_modifier(Modifier::DIM)),
                ]))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}
