//! Frame composition: title bar on top, the screen bound to the active
//! route in the middle, the bottom navigation bar underneath.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::widgets::{Block, Paragraph};

use crate::core::route::Route;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::nav_bar::{self, NAV_BAR_HEIGHT, NavBar};
use crate::tui::components::{RoomList, SessionDetail, SessionList, SpeakerList, TitleBar};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, route: &Route) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(NAV_BAR_HEIGHT)]);
    let [title_area, main_area, bar_area] = layout.areas(frame.area());

    let mut title_bar = TitleBar {
        conference_name: app.conference_name.clone(),
        screen_title: route.screen().title(),
        status_message: app.status_message.clone(),
        is_loading: app.is_loading,
    };
    title_bar.render(frame, title_area);

    // Main area: error view wins over the active screen.
    if let Some(error_msg) = &app.error {
        draw_error_view(frame, main_area, error_msg);
    } else {
        match route {
            Route::SessionList => {
                SessionList::new(app, &mut tui.session_list).render(frame, main_area);
            }
            Route::SessionDetails { id } => {
                SessionDetail::new(app, id, &mut tui.session_detail).render(frame, main_area);
            }
            Route::SpeakerList => {
                SpeakerList::new(app, &mut tui.speaker_list).render(frame, main_area);
            }
            Route::RoomList => {
                RoomList::new(app, &mut tui.room_list).render(frame, main_area);
            }
        }
    }

    NavBar::new(route.screen()).render(frame, bar_area);
}

fn draw_error_view(frame: &mut Frame, area: Rect, error_msg: &str) {
    let error_paragraph = Paragraph::new(format!("{error_msg}\n\nPress r to retry."))
        .block(Block::bordered().title("ERROR"))
        .alignment(Alignment::Center);
    frame.render_widget(error_paragraph, area);
}

/// Hit test a mouse click against the bottom bar, recomputing the frame
/// layout so click handling can't drift from rendering.
pub fn hit_test_nav(column: u16, row: u16, frame_area: Rect) -> Option<usize> {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(NAV_BAR_HEIGHT)]);
    let [_title_area, _main_area, bar_area] = layout.areas(frame_area);
    nav_bar::hit_test(column, row, bar_area)
}
