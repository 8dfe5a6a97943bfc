//! JSON-file-backed schedule source.
//!
//! The expected document shape matches [`crate::data::Schedule`]:
//!
//! ```json
//! {
//!   "sessions": [{ "id": "...", "title": "...", "starts_at": "...", ... }],
//!   "speakers": [{ "id": "...", "name": "...", ... }],
//!   "rooms":    [{ "id": "...", "name": "...", ... }]
//! }
//! ```

use std::path::PathBuf;

use async_trait::async_trait;
use log::info;

use super::source::{ScheduleSource, SourceError};
use super::types::Schedule;

pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl ScheduleSource for JsonFileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    async fn load(&self) -> Result<Schedule, SourceError> {
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(SourceError::Io)?;
        let schedule: Schedule =
            serde_json::from_str(&contents).map_err(SourceError::Parse)?;
        info!(
            "Loaded {} sessions, {} speakers, {} rooms from {}",
            schedule.sessions.len(),
            schedule.speakers.len(),
            schedule.rooms.len(),
            self.path.display()
        );
        Ok(schedule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_io_error() {
        let source = JsonFileSource::new(PathBuf::from("/nonexistent/schedule.json"));
        let err = tokio_test::block_on(source.load()).unwrap_err();
        assert!(matches!(err, SourceError::Io(_)));
    }

    #[test]
    fn test_loads_schedule_document() {
        let dir = std::env::temp_dir().join("confsched-file-source-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("schedule.json");
        std::fs::write(
            &path,
            r#"{
                "sessions": [{
                    "id": "s1",
                    "title": "Intro",
                    "starts_at": "2026-09-10T09:00:00Z",
                    "ends_at": "2026-09-10T09:30:00Z"
                }],
                "rooms": [{ "id": "r1", "name": "Main Hall" }]
            }"#,
        )
        .unwrap();

        let source = JsonFileSource::new(path);
        let schedule = tokio_test::block_on(source.load()).unwrap();
        assert_eq!(schedule.sessions.len(), 1);
        assert_eq!(schedule.rooms[0].name, "Main Hall");
        assert!(schedule.speakers.is_empty());
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let dir = std::env::temp_dir().join("confsched-file-source-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let source = JsonFileSource::new(path);
        let err = tokio_test::block_on(source.load()).unwrap_err();
        assert!(matches!(err, SourceError::Parse(_)));
    }
}
