use crossterm::event::{self, Event, KeyCode, KeyModifiers, MouseEventKind};

/// TUI-specific input events, decoded from crossterm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    /// Ctrl+C — quit regardless of the active screen.
    ForceQuit,
    /// `q` — quit.
    Quit,
    /// Esc — pop back (no-op at the stack root).
    Back,
    /// Enter — activate the selected row.
    Submit,
    CursorUp,
    CursorDown,
    ScrollUp,
    ScrollDown,
    /// Digit keys 1..=9, zero-based tab index.
    SelectTab(usize),
    /// Tab — cycle to the next bottom-bar entry.
    NextTab,
    /// `r` — reload the schedule.
    Refresh,
    MouseClick(u16, u16),
    Resize,
}

/// Poll for an event with the given timeout.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if !event::poll(timeout).ok()? {
        return None;
    }
    match event::read().ok()? {
        Event::Key(key_event) if key_event.is_press() => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
                (_, KeyCode::Char('r')) => Some(TuiEvent::Refresh),
                (_, KeyCode::Char(c @ '1'..='9')) => {
                    Some(TuiEvent::SelectTab(c as usize - '1' as usize))
                }
                (_, KeyCode::Tab) => Some(TuiEvent::NextTab),
                (_, KeyCode::Esc) => Some(TuiEvent::Back),
                (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
                (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
                (_, KeyCode::PageUp) => Some(TuiEvent::ScrollUp),
                (_, KeyCode::PageDown) => Some(TuiEvent::ScrollDown),
                _ => None,
            }
        }
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(_) => {
                Some(TuiEvent::MouseClick(mouse_event.column, mouse_event.row))
            }
            MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

/// Poll for an event without blocking (returns immediately).
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}
