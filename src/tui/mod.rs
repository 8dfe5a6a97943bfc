//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the active
//! screen, and translates keyboard/mouse events into navigation calls
//! and core actions.
//!
//! This is the only module that knows about ratatui and crossterm; the
//! navigation state machine and the schedule data know nothing about
//! terminals.
//!
//! ## The screen host
//!
//! [`run`] is the screen host: it exclusively owns the
//! [`NavigationState`], renders whichever screen the active route names,
//! and hands child screens their effect as emitted events — the session
//! list's `Open` becomes `navigate`, the detail screen's Esc becomes
//! `pop_back`, the bottom bar's selection becomes a top-level navigate
//! with the pop-up-to-root + launch-single-top policy. All mutation
//! happens on this one thread, so rapid repeated inputs serialize in
//! arrival order.
//!
//! ## Redraw strategy
//!
//! Frames are drawn only when something happened: an input event, a
//! route change reported by the navigation observer channel, or an
//! action from a background schedule load. Otherwise the loop sleeps in
//! the event poll.

mod component;
mod components;
mod event;
mod ui;

use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use log::{debug, error, info};

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::nav::NavigationState;
use crate::core::route::{Route, Screen};
use crate::core::state::App;
use crate::data::{BundledSource, JsonFileSource, ScheduleSource};
use crate::tui::component::EventHandler;
use crate::tui::components::nav_bar::NavBar;
use crate::tui::components::{
    NavEvent, RoomListState, SessionDetailState, SessionListEvent, SessionListState,
    SpeakerListState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic).
/// Screen states persist across tab switches, so selections and scroll
/// positions survive navigation.
pub struct TuiState {
    pub session_list: SessionListState,
    pub session_detail: SessionDetailState,
    pub speaker_list: SpeakerListState,
    pub room_list: RoomListState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            session_list: SessionListState::new(),
            session_detail: SessionDetailState::new(),
            speaker_list: SpeakerListState::new(),
            room_list: RoomListState::new(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Build the schedule source from the resolved config.
pub fn build_source(config: &ResolvedConfig) -> Arc<dyn ScheduleSource> {
    match &config.schedule_file {
        Some(path) => Arc::new(JsonFileSource::new(path.clone())),
        None => Arc::new(BundledSource),
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source = build_source(&config);
    let mut app = App::new(source.clone(), config.conference_name.clone());
    let mut nav = NavigationState::new(config.start_route.clone());
    let route_rx = nav.subscribe();
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // Initial load goes through the reducer, same as a manual refresh
    if update(&mut app, Action::Refresh) == Effect::SpawnLoad {
        spawn_load(source.clone(), tx.clone());
    }

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, nav.current()))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(std::time::Duration::from_millis(250));

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            if matches!(event, TuiEvent::ForceQuit | TuiEvent::Quit) {
                if update(&mut app, Action::Quit) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            if matches!(event, TuiEvent::Refresh) {
                if update(&mut app, Action::Refresh) == Effect::SpawnLoad {
                    spawn_load(app.source.clone(), tx.clone());
                }
                continue;
            }

            // Esc → pop back; defined no-op at the stack root
            if matches!(event, TuiEvent::Back) {
                nav.pop_back();
                continue;
            }

            // Mouse clicks only target the bottom bar
            if let TuiEvent::MouseClick(column, row) = event {
                let frame_area = terminal.get_frame().area();
                if let Some(index) = ui::hit_test_nav(column, row, frame_area) {
                    if let Some(entry) = components::nav_bar::NAV_ENTRIES.get(index) {
                        navigate_top_level(&mut nav, entry.screen);
                    }
                }
                continue;
            }

            // Bottom bar first: tab selection works from every screen
            let mut bar = NavBar::new(nav.current().screen());
            if let Some(NavEvent::Navigate(screen)) = bar.handle_event(&event) {
                navigate_top_level(&mut nav, screen);
                continue;
            }

            // Remaining events go to the active screen
            match nav.current().clone() {
                Route::SessionList => {
                    if let Some(SessionListEvent::Open(id)) =
                        tui.session_list.handle_event(&event, &app.sessions)
                    {
                        tui.session_detail.reset();
                        nav.navigate(Route::session_details(id));
                    }
                }
                Route::SessionDetails { .. } => {
                    tui.session_detail.handle_event(&event);
                }
                Route::SpeakerList => {
                    tui.speaker_list.handle_event(&event, app.speakers.len());
                }
                Route::RoomList => {
                    tui.room_list.handle_event(&event, app.rooms.len());
                }
            }
        }

        // Route observer: any effective transition means a redraw
        while let Ok(route) = route_rx.try_recv() {
            debug!("Active route now {route}");
            needs_redraw = true;
        }

        // Background task actions (schedule loads)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            match update(&mut app, action) {
                Effect::Quit => should_quit = true,
                Effect::SpawnLoad => spawn_load(app.source.clone(), tx.clone()),
                Effect::None => {}
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Dispatch a bottom-bar selection with the top-level navigation policy.
///
/// A bar entry naming a parameterized screen is a RouteTable mismatch:
/// loud in development, ignored in release.
fn navigate_top_level(nav: &mut NavigationState, screen: Screen) {
    match Route::top_level(screen) {
        Some(route) => nav.navigate_top_level(route),
        None => {
            debug_assert!(false, "bottom bar entry for parameterized screen {screen:?}");
            error!("Bottom bar requested parameterized screen {screen:?}; ignoring");
        }
    }
}

fn spawn_load(source: Arc<dyn ScheduleSource>, tx: mpsc::Sender<Action>) {
    info!("Loading schedule from {}", source.name());
    tokio::spawn(async move {
        let action = match source.load().await {
            Ok(schedule) => Action::ScheduleLoaded(schedule),
            Err(e) => Action::ScheduleFailed(e.to_string()),
        };
        if tx.send(action).is_err() {
            log::warn!("Failed to send schedule load result: receiver dropped");
        }
    });
}
