//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use crate::core::action::{Action, update};
use crate::core::state::App;
use crate::data::{Room, Schedule, ScheduleSource, Session, SourceError, Speaker};

/// A source that returns a fixed in-memory schedule.
pub struct StaticSource(pub Schedule);

#[async_trait]
impl ScheduleSource for StaticSource {
    fn name(&self) -> String {
        "static test schedule".to_string()
    }

    async fn load(&self) -> Result<Schedule, SourceError> {
        Ok(self.0.clone())
    }
}

/// A small but cross-referenced schedule: three sessions (out of start
/// order on purpose), two speakers, two rooms.
pub fn sample_schedule() -> Schedule {
    let at = |h, m| Utc.with_ymd_and_hms(2026, 9, 10, h, m, 0).unwrap();
    Schedule {
        sessions: vec![
            Session {
                id: "deep-dive".to_string(),
                title: "Parser Deep Dive".to_string(),
                description: "Line one.\nLine two.".to_string(),
                starts_at: at(11, 0),
                ends_at: at(11, 45),
                room_id: Some("hall".to_string()),
                speaker_ids: vec!["ada".to_string(), "grace".to_string()],
            },
            Session {
                id: "keynote".to_string(),
                title: "Keynote".to_string(),
                description: "Welcome.".to_string(),
                starts_at: at(9, 0),
                ends_at: at(9, 45),
                room_id: Some("hall".to_string()),
                speaker_ids: vec!["ada".to_string()],
            },
            Session {
                id: "hallway".to_string(),
                title: "Hallway Track".to_string(),
                description: String::new(),
                starts_at: at(10, 0),
                ends_at: at(10, 45),
                room_id: None,
                speaker_ids: vec!["ghost".to_string()], // deliberately dangling
            },
        ],
        speakers: vec![
            Speaker {
                id: "ada".to_string(),
                name: "Ada".to_string(),
                company: Some("Analytical Engines".to_string()),
                bio: "First.".to_string(),
            },
            Speaker {
                id: "grace".to_string(),
                name: "Grace".to_string(),
                company: None,
                bio: String::new(),
            },
        ],
        rooms: vec![
            Room {
                id: "hall".to_string(),
                name: "Hall".to_string(),
                capacity: Some(200),
            },
            Room {
                id: "annex".to_string(),
                name: "Annex".to_string(),
                capacity: None,
            },
        ],
    }
}

/// Creates an empty test App backed by a static source.
pub fn test_app() -> App {
    App::new(
        Arc::new(StaticSource(Schedule::default())),
        "TestConf".to_string(),
    )
}

/// Creates a test App with [`sample_schedule`] already applied through
/// the reducer (so sessions arrive sorted, as screens expect).
pub fn test_app_with_schedule() -> App {
    let mut app = App::new(
        Arc::new(StaticSource(sample_schedule())),
        "TestConf".to_string(),
    );
    update(&mut app, Action::ScheduleLoaded(sample_schedule()));
    app
}
