//! # Bottom navigation bar
//!
//! Presentation + dispatch adapter over the navigation host. Owns no
//! navigation state: it reads the current route each frame to decide
//! which entry to highlight, and emits [`NavEvent::Navigate`] when the
//! user picks an entry. The host dispatches that with the top-level
//! policy (pop-up-to-root + launch-single-top).
//!
//! The route table is fixed at startup: one entry per bottom-bar-visible
//! screen. Session details is reachable only from the session list, so
//! while it is active no entry is highlighted.

use std::rc::Rc;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::route::Screen;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// One bottom-bar entry: route identifier, icon glyph, accessibility
/// label for logs and narrow rendering.
pub struct NavEntry {
    pub screen: Screen,
    pub icon: &'static str,
    pub label: &'static str,
}

/// The fixed route table. Order is presentation order; immutable after
/// construction.
pub const NAV_ENTRIES: [NavEntry; 3] = [
    NavEntry {
        screen: Screen::SessionList,
        icon: "▶",
        label: "Sessions",
    },
    NavEntry {
        screen: Screen::SpeakerList,
        icon: "●",
        label: "Speakers",
    },
    NavEntry {
        screen: Screen::RoomList,
        icon: "■",
        label: "Rooms",
    },
];

/// Index of the entry matching the current screen, or `None` when the
/// screen is not bottom-bar-addressable.
pub fn selected_index(current: Screen) -> Option<usize> {
    NAV_ENTRIES.iter().position(|entry| entry.screen == current)
}

/// The bar is two rows: a separator border and the entry row.
pub const NAV_BAR_HEIGHT: u16 = 2;

/// The entry columns within the bar area. Render and hit testing both go
/// through here so a click always resolves to the entry drawn under it.
fn entry_columns(area: Rect) -> Rc<[Rect]> {
    let inner = Block::default().borders(Borders::TOP).inner(area);
    Layout::horizontal(NAV_ENTRIES.map(|_| Constraint::Ratio(1, NAV_ENTRIES.len() as u32)))
        .split(inner)
}

/// Hit test a mouse click against the entry row. `area` is the full bar
/// area as laid out by `ui::draw_ui`.
pub fn hit_test(column: u16, row: u16, area: Rect) -> Option<usize> {
    entry_columns(area)
        .iter()
        .position(|cell| cell.contains(Position::new(column, row)))
}

/// Events emitted by the bar for the host to dispatch.
#[derive(Debug, PartialEq, Eq)]
pub enum NavEvent {
    Navigate(Screen),
}

/// Transient per-frame wrapper; `current` is a prop read from the host.
pub struct NavBar {
    pub current: Screen,
}

impl NavBar {
    pub fn new(current: Screen) -> Self {
        Self { current }
    }
}

impl Component for NavBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray));
        frame.render_widget(block, area);

        let selected = selected_index(self.current);
        let columns = entry_columns(area);

        for (i, entry) in NAV_ENTRIES.iter().enumerate() {
            let style = if selected == Some(i) {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(Color::Gray)
            };
            let line = Line::from(vec![
                Span::styled(format!(" {} ", i + 1), style.add_modifier(Modifier::DIM)),
                Span::styled(format!("{} ", entry.icon), style),
                Span::styled(entry.screen.title(), style),
                Span::styled(" ", style),
            ]);
            frame.render_widget(Paragraph::new(line), columns[i]);
        }
    }
}

impl EventHandler for NavBar {
    type Event = NavEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<NavEvent> {
        match event {
            TuiEvent::SelectTab(i) => NAV_ENTRIES
                .get(*i)
                .map(|entry| NavEvent::Navigate(entry.screen)),
            TuiEvent::NextTab => {
                // From a non-addressable screen, Tab lands on the first
                // entry; otherwise it cycles.
                let next = match selected_index(self.current) {
                    Some(i) => (i + 1) % NAV_ENTRIES.len(),
                    None => 0,
                };
                Some(NavEvent::Navigate(NAV_ENTRIES[next].screen))
            }
            _ => None,
        }
    }
}
