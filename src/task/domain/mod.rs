//! Domain model for caseworker tasks.
//!
//! Tasks start life as a [`TaskDraft`] built from a creation request and
//! become a [`Task`] once a repository assigns an identifier and timestamps.

mod error;
mod ids;
mod task;

pub use error::{HolidayConflict, ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use task::{DESCRIPTION_MAX_CHARS, TITLE_MAX_CHARS, Task, TaskDraft, TaskStatus};
