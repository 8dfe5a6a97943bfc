//! Domain types for a conference schedule.
//!
//! Timestamps are RFC 3339 in JSON (chrono's serde default for
//! `DateTime<Utc>`). Cross-references between sessions, rooms, and
//! speakers go by id; dangling ids are tolerated at the type level and
//! handled at display time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Session {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    #[serde(default)]
    pub room_id: Option<String>,
    #[serde(default)]
    pub speaker_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Speaker {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub bio: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Room {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub capacity: Option<u32>,
}

/// Everything a source delivers in one load.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Schedule {
    #[serde(default)]
    pub sessions: Vec<Session>,
    #[serde(default)]
    pub speakers: Vec<Speaker>,
    #[serde(default)]
    pub rooms: Vec<Room>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_session_json_parses() {
        let json = r#"{
            "id": "s1",
            "title": "Opening Keynote",
            "starts_at": "2026-09-10T09:00:00Z",
            "ends_at": "2026-09-10T09:45:00Z"
        }"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.id, "s1");
        assert!(session.description.is_empty());
        assert!(session.room_id.is_none());
        assert!(session.speaker_ids.is_empty());
    }

    #[test]
    fn test_empty_schedule_parses() {
        let schedule: Schedule = serde_json::from_str("{}").unwrap();
        assert!(schedule.sessions.is_empty());
        assert!(schedule.speakers.is_empty());
        assert!(schedule.rooms.is_empty());
    }
}
