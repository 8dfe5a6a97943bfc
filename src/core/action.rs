//! # Actions
//!
//! Everything that can happen to the shared state becomes an `Action`.
//! A background load finishes? That's `Action::ScheduleLoaded`.
//! The user hits `r`? That's `Action::Refresh`.
//!
//! `update()` applies an action to the state and returns an [`Effect`]
//! telling the adapter what side effect to run. No I/O happens here, so
//! every transition is a plain function call in tests.
//!
//! ```text
//! State + Action  →  update()  →  mutated State + Effect
//! ```

use log::warn;

use crate::core::state::App;
use crate::data::Schedule;

#[derive(Debug)]
pub enum Action {
    /// A background load delivered a schedule.
    ScheduleLoaded(Schedule),
    /// A background load failed; the message is already user-readable.
    ScheduleFailed(String),
    /// A schedule load was requested, at startup or by the user.
    Refresh,
    Quit,
}

/// What the adapter should do after an update.
#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Start a background schedule load.
    SpawnLoad,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::ScheduleLoaded(mut schedule) => {
            schedule.sessions.sort_by(|a, b| {
                a.starts_at.cmp(&b.starts_at).then_with(|| a.title.cmp(&b.title))
            });
            app.status_message = format!(
                "{} sessions · {} speakers · {} rooms",
                schedule.sessions.len(),
                schedule.speakers.len(),
                schedule.rooms.len()
            );
            app.sessions = schedule.sessions;
            app.speakers = schedule.speakers;
            app.rooms = schedule.rooms;
            app.is_loading = false;
            app.error = None;
            Effect::None
        }
        Action::ScheduleFailed(message) => {
            warn!("Schedule load failed: {message}");
            app.is_loading = false;
            app.error = Some(message);
            app.status_message = "Load failed".to_string();
            Effect::None
        }
        Action::Refresh => {
            if app.is_loading {
                // A load is already in flight; don't stack another.
                return Effect::None;
            }
            app.is_loading = true;
            app.error = None;
            app.status_message = "Loading schedule…".to_string();
            Effect::SpawnLoad
        }
        Action::Quit => Effect::Quit,
    }
}
