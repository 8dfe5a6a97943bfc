//! # TUI Components
//!
//! One file per component, self-contained: state types, event emission,
//! rendering, and tests live together.
//!
//! Two patterns:
//!
//! - Stateless, props-based: `TitleBar`, `NavBar` — rebuilt each frame
//!   from host data.
//! - Persistent state + transient wrapper: the screens. Their `*State`
//!   structs live in `TuiState` so selections and scroll positions
//!   survive tab switches; the wrapper borrows that state for one render
//!   pass.
//!
//! Screens emit high-level events (`SessionListEvent::Open`,
//! `NavEvent::Navigate`) instead of mutating navigation themselves; the
//! host owns the back-stack and is the only dispatcher.

pub mod nav_bar;
pub mod room_list;
pub mod session_detail;
pub mod session_list;
pub mod speaker_list;
pub mod title_bar;

pub use nav_bar::{NavBar, NavEvent};
pub use room_list::{RoomList, RoomListState};
pub use session_detail::{SessionDetail, SessionDetailState};
pub use session_list::{SessionList, SessionListEvent, SessionListState};
pub use speaker_list::{SpeakerList, SpeakerListState};
pub use title_bar::TitleBar;

use unicode_width::UnicodeWidthStr;

/// Truncate a string to fit within `max_width` display columns, adding
/// an ellipsis if anything was cut.
pub(crate) fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let budget = max_width - 1; // room for the ellipsis
    let mut used = 0;
    for c in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// Left-align a string in `width` display columns. Padding counts
/// columns, not chars, so wide-glyph text lines up with ASCII rows.
pub(crate) fn pad_to_width(s: &str, width: usize) -> String {
    let mut out = s.to_string();
    let used = s.width();
    if used < width {
        out.push_str(&" ".repeat(width - used));
    }
    out
}
