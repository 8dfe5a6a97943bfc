//! Bundled sample schedule, used when no schedule file is configured so
//! the binary is browsable out of the box.

use async_trait::async_trait;

use super::source::{ScheduleSource, SourceError};
use super::types::Schedule;

const SAMPLE_JSON: &str = include_str!("sample_schedule.json");

pub struct BundledSource;

#[async_trait]
impl ScheduleSource for BundledSource {
    fn name(&self) -> String {
        "bundled sample schedule".to_string()
    }

    async fn load(&self) -> Result<Schedule, SourceError> {
        serde_json::from_str(SAMPLE_JSON).map_err(SourceError::Parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_schedule_is_valid() {
        let schedule = tokio_test::block_on(BundledSource.load()).unwrap();
        assert!(!schedule.sessions.is_empty());
        assert!(!schedule.speakers.is_empty());
        assert!(!schedule.rooms.is_empty());
    }

    #[test]
    fn test_bundled_cross_references_resolve() {
        let schedule = tokio_test::block_on(BundledSource.load()).unwrap();
        for session in &schedule.sessions {
            if let Some(room_id) = &session.room_id {
                assert!(
                    schedule.rooms.iter().any(|r| &r.id == room_id),
                    "session {} references unknown room {}",
                    session.id,
                    room_id
                );
            }
            for speaker_id in &session.speaker_ids {
                assert!(
                    schedule.speakers.iter().any(|s| &s.id == speaker_id),
                    "session {} references unknown speaker {}",
                    session.id,
                    speaker_id
                );
            }
        }
    }
}
