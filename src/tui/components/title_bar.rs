//! # Title bar
//!
//! Stateless single-line component: conference name, the active screen's
//! title, and the transient status text. All data arrives as props; the
//! bar neither owns nor observes anything.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

pub struct TitleBar {
    pub conference_name: String,
    pub screen_title: &'static str,
    pub status_message: String,
    pub is_loading: bool,
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(
                format!(" {} ", self.conference_name),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled("· ", Style::default().fg(Color::DarkGray)),
            Span::raw(self.screen_title),
        ];
        if self.is_loading {
            spans.push(Span::styled(
                "  Loading…",
                Style::default().fg(Color::Yellow),
            ));
        } else if !self.status_message.is_empty() {
            spans.push(Span::styled(
                format!("  {}", self.status_message),
                Style::default().fg(Color::DarkGray),
            ));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
