use std::fmt;

use async_trait::async_trait;

use super::types::Schedule;

/// Errors that can occur while loading a schedule.
#[derive(Debug)]
pub enum SourceError {
    /// Could not read the underlying data (missing file, permissions).
    Io(std::io::Error),
    /// The data was read but is not a valid schedule document.
    Parse(serde_json::Error),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Io(e) => write!(f, "schedule I/O error: {e}"),
            SourceError::Parse(e) => write!(f, "schedule parse error: {e}"),
        }
    }
}

impl std::error::Error for SourceError {}

/// Where the schedule comes from. Loads are async so implementations can
/// do real I/O; callers run them on background tasks.
#[async_trait]
pub trait ScheduleSource: Send + Sync {
    /// A short description of the source, for logs and the status line.
    fn name(&self) -> String;

    /// Load the full schedule.
    async fn load(&self) -> Result<Schedule, SourceError>;
}
