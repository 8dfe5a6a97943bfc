//! # Schedule data layer
//!
//! The collaborator the screens read from. The routing component never
//! touches this directly; loads run on background tasks and report back
//! through the action channel, so navigation never blocks on I/O.
//!
//! [`ScheduleSource`] is the seam: the app holds an
//! `Arc<dyn ScheduleSource>` and does not care whether the schedule comes
//! from a file on disk or the bundled sample. A remote (e.g. GraphQL)
//! source would slot in behind the same trait.

pub mod file;
pub mod sample;
pub mod source;
pub mod types;

pub use file::JsonFileSource;
pub use sample::BundledSource;
pub use source::{ScheduleSource, SourceError};
pub use types::{Room, Schedule, Session, Speaker};
