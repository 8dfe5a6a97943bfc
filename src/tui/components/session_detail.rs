//! # Session detail screen
//!
//! Reached only by navigation from the session list, with the session id
//! carried in the route parameter. Esc pops back via the host. If the id
//! no longer resolves (the schedule was refreshed from under the route),
//! a not-found notice renders instead.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

use crate::core::state::App;
use crate::tui::event::TuiEvent;

/// Persistent state: scroll offset for long descriptions.
pub struct SessionDetailState {
    pub scroll: u16,
}

impl SessionDetailState {
    pub fn new() -> Self {
        Self { scroll: 0 }
    }

    /// Reset scroll when a different session is opened.
    pub fn reset(&mut self) {
        self.scroll = 0;
    }

    pub fn handle_event(&mut self, event: &TuiEvent) {
        match event {
            TuiEvent::CursorUp | TuiEvent::ScrollUp => {
                self.scroll = self.scroll.saturating_sub(1);
            }
            TuiEvent::CursorDown | TuiEvent::ScrollDown => {
                self.scroll = self.scroll.saturating_add(1);
            }
            _ => {}
        }
    }
}

/// Transient render wrapper.
pub struct SessionDetail<'a> {
    app: &'a App,
    session_id: &'a str,
    state: &'a mut SessionDetailState,
}

impl<'a> SessionDetail<'a> {
    pub fn new(app: &'a App, session_id: &'a str, state: &'a mut SessionDetailState) -> Self {
        Self {
            app,
            session_id,
            state,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::NONE)
            .padding(Padding::horizontal(1));

        let Some(session) = self.app.session(self.session_id) else {
            let missing = Paragraph::new(format!(
                "Session {:?} is not in the current schedule.\n\nPress Esc to go back.",
                self.session_id
            ))
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
            frame.render_widget(missing, area);
            return;
        };

        let mut lines = vec![
            Line::from(Span::styled(
                session.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!(
                    "{} – {}",
                    session.starts_at.format("%A %H:%M"),
                    session.ends_at.format("%H:%M")
                ),
                Style::default().fg(Color::Cyan),
            )),
        ];

        if let Some(room) = self.app.room_name(session) {
            lines.push(Line::from(Span::styled(
                format!("Room: {room}"),
                Style::default().fg(Color::Gray),
            )));
        }

        let speakers = self.app.speakers_for(session);
        if !speakers.is_empty() {
            let names: Vec<&str> = speakers.iter().map(|s| s.name.as_str()).collect();
            lines.push(Line::from(Span::styled(
                format!("Speakers: {}", names.join(", ")),
                Style::default().fg(Color::Gray),
            )));
        }

        if !session.description.is_empty() {
            lines.push(Line::default());
            for para in session.description.split('\n') {
                lines.push(Line::from(para.to_string()));
            }
        }

        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .scroll((self.state.scroll, 0))
            .block(block.title_bottom(
                Line::styled(" Esc Back  ↑/↓ Scroll ", Style::default().fg(Color::DarkGray))
                    .centered(),
            ));
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_saturates_at_top() {
        let mut state = SessionDetailState::new();
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.scroll, 0);
        state.handle_event(&TuiEvent::CursorDown);
        state.handle_event(&TuiEvent::CursorDown);
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.scroll, 1);
    }

    #[test]
    fn test_reset_clears_scroll() {
        let mut state = SessionDetailState::new();
        state.handle_event(&TuiEvent::CursorDown);
        state.reset();
        assert_eq!(state.scroll, 0);
    }
}
