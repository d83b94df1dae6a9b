//! Application services for task creation orchestration.

mod creation;
mod response;

pub use creation::{
    CreateTaskRequest, TaskCreationConfig, TaskCreationError, TaskCreationResult,
    TaskCreationService,
};
pub use response::TaskResponse;
