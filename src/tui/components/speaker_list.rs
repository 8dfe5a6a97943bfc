//! # Speaker list screen
//!
//! Read-only scrollable list. Selection exists for keyboard scrolling
//! only; there is no speaker detail route.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};

use unicode_width::UnicodeWidthStr;

use super::{pad_to_width, truncate_to_width};
use crate::core::state::App;
use crate::tui::event::TuiEvent;

pub struct SpeakerListState {
    pub selected: usize,
    pub list_state: ListState,
}

impl SpeakerListState {
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

pub struct SpeakerList<'a> {
    app: &'a App,
    state: &'a mut SpeakerListState,
}

impl<'a> SpeakerList<'a> {
    pub fn new(app: &'a App, state: &'a mut SpeakerListState) -> Self {
        Self { app, state }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::NONE)
            .padding(Padding::horizontal(1));

        if self.app.speakers.is_empty() {
            let text = if self.app.is_loading {
                "Loading speakers…"
            } else {
                "No speakers in this schedule."
            };
            let empty = Paragraph::new(text)
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        self.state.selected = self.state.selected.min(self.app.speakers.len() - 1);
        self.state.list_state.select(Some(self.state.selected));

        let inner_width = area.width.saturating_sub(2) as usize;
        let items: Vec<ListItem> = self
            .app
            .speakers
            .iter()
            .enumerate()
            .map(|(i, speaker)| {
                let company = speaker.company.as_deref().unwrap_or("");
                let fixed = company.width() + 2;
                let name_width = inner_width.saturating_sub(fixed);
                let name = truncate_to_width(&speaker.name, name_width);
                let padded_name = pad_to_width(&name, name_width);

                let style = if i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Gray)
                };

                ListItem::new(Line::from(vec![
                    Span::styled(padded_name, style),
                    Span::styled("  ", style),
                    Span::styled(company.to_string(), style.add_modifier(Modifier::DIM)),
                ]))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}
