//! # Application state
//!
//! The single shared view-model every screen reads from. Created once
//! when the host mounts and passed in explicitly; no process-wide
//! singletons. Contains domain data only — presentation state (scroll
//! offsets, list selections) lives in the `tui` module.
//!
//! State changes only happen through `update(state, action)` in
//! action.rs, so mutations stay predictable and testable.

use std::sync::Arc;

use crate::data::{Room, ScheduleSource, Session, Speaker};

pub struct App {
    pub source: Arc<dyn ScheduleSource>,
    pub conference_name: String,
    pub sessions: Vec<Session>,
    pub speakers: Vec<Speaker>,
    pub rooms: Vec<Room>,
    pub is_loading: bool,
    pub status_message: String,
    pub error: Option<String>,
}

impl App {
    pub fn new(source: Arc<dyn ScheduleSource>, conference_name: String) -> Self {
        Self {
            source,
            conference_name,
            sessions: Vec::new(),
            speakers: Vec::new(),
            rooms: Vec::new(),
            is_loading: false,
            status_message: String::new(),
            error: None,
        }
    }

    pub fn session(&self, id: &str) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id == id)
    }

    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    pub fn speaker(&self, id: &str) -> Option<&Speaker> {
        self.speakers.iter().find(|s| s.id == id)
    }

    /// Room name for a session, if the session names a known room.
    pub fn room_name(&self, session: &Session) -> Option<&str> {
        session
            .room_id
            .as_deref()
            .and_then(|id| self.room(id))
            .map(|room| room.name.as_str())
    }

    /// Speakers of a session, in the session's declared order. Dangling
    /// ids are skipped; the schedule data owns that problem.
    pub fn speakers_for(&self, session: &Session) -> Vec<&Speaker> {
        session
            .speaker_ids
            .iter()
            .filter_map(|id| self.speaker(id))
            .collect()
    }
}
