//! Service layer for holiday-validated task creation.

use crate::holiday::{domain::RegionId, ports::HolidaySource, services::HolidayChecker};
use crate::task::{
    domain::{
        DESCRIPTION_MAX_CHARS, HolidayConflict, TITLE_MAX_CHARS, Task, TaskDomainError,
        TaskDraft, TaskId, TaskStatus,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    status: TaskStatus,
    due_date: DateTime<Utc>,
}

impl CreateTaskRequest {
    /// Creates a request with required task fields.
    #[must_use]
    pub fn new(title: impl Into<String>, status: TaskStatus, due_date: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            description: None,
            status,
            due_date,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the requested due date.
    #[must_use]
    pub const fn due_date(&self) -> DateTime<Utc> {
        self.due_date
    }

    /// Checks field constraints: a non-blank title of at most
    /// [`TITLE_MAX_CHARS`] characters, a description of at most
    /// [`DESCRIPTION_MAX_CHARS`] characters, and a due date strictly after
    /// the clock's current time.
    ///
    /// Transport layers call this before [`TaskCreationService::create_task`],
    /// which assumes a valid request.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint as a [`TaskDomainError`].
    pub fn validate(&self, clock: &impl Clock) -> Result<(), TaskDomainError> {
        if self.title.trim().is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        let title_length = self.title.chars().count();
        if title_length > TITLE_MAX_CHARS {
            return Err(TaskDomainError::TitleTooLong {
                length: title_length,
                max: TITLE_MAX_CHARS,
            });
        }
        if let Some(description) = &self.description {
            let length = description.chars().count();
            if length > DESCRIPTION_MAX_CHARS {
                return Err(TaskDomainError::DescriptionTooLong {
                    length,
                    max: DESCRIPTION_MAX_CHARS,
                });
            }
        }
        if self.due_date <= clock.utc() {
            return Err(TaskDomainError::DueDateNotInFuture(self.due_date));
        }
        Ok(())
    }

    fn into_draft(self) -> TaskDraft {
        TaskDraft::new(self.title, self.status, self.due_date).with_description(self.description)
    }
}

/// Configuration for [`TaskCreationService`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskCreationConfig {
    /// Region whose holidays block due dates.
    pub region: RegionId,
}

impl TaskCreationConfig {
    /// Sets the holiday region.
    #[must_use]
    pub fn with_region(mut self, region: RegionId) -> Self {
        self.region = region;
        self
    }
}

/// Service-level errors for task creation.
///
/// A holiday conflict and a repository failure are always distinct variants.
#[derive(Debug, Error)]
pub enum TaskCreationError {
    /// The due date falls on a public holiday; nothing was stored.
    #[error(transparent)]
    HolidayConflict(#[from] HolidayConflict),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task creation service operations.
pub type TaskCreationResult<T> = Result<T, TaskCreationError>;

/// Task creation orchestration service.
///
/// Checks the due date against the configured region's holidays and only
/// then delegates to the repository.
pub struct TaskCreationService<R, S, C>
where
    R: TaskRepository,
    S: HolidaySource,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    checker: HolidayChecker<S, C>,
    config: TaskCreationConfig,
}

impl<R, S, C> Clone for TaskCreationService<R, S, C>
where
    R: TaskRepository,
    S: HolidaySource,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            checker: self.checker.clone(),
            config: self.config.clone(),
        }
    }
}

impl<R, S, C> TaskCreationService<R, S, C>
where
    R: TaskRepository,
    S: HolidaySource,
    C: Clock + Send + Sync,
{
    /// Creates a new task creation service.
    #[must_use]
    pub const fn new(
        repository: Arc<R>,
        checker: HolidayChecker<S, C>,
        config: TaskCreationConfig,
    ) -> Self {
        Self {
            repository,
            checker,
            config,
        }
    }

    /// Returns the configured holiday region.
    #[must_use]
    pub const fn region(&self) -> &RegionId {
        &self.config.region
    }

    /// Creates a task unless its due date is a public holiday.
    ///
    /// When the holiday calendar is unavailable the date is treated as a
    /// working day.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCreationError::HolidayConflict`] without calling the
    /// repository when the due date matches a holiday, or
    /// [`TaskCreationError::Repository`] when the repository rejects the save.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskCreationResult<Task> {
        let region = &self.config.region;
        if let Some(holiday) = self.checker.is_holiday(request.due_date, region).await {
            let conflict = HolidayConflict::from(&holiday);
            tracing::info!(
                %region,
                holiday = conflict.holiday_name(),
                date = %conflict.holiday_date(),
                "rejecting task due on a public holiday"
            );
            return Err(conflict.into());
        }

        let task = self.repository.save(&request.into_draft()).await?;
        tracing::info!(task_id = %task.id(), status = %task.status(), "task created");
        Ok(task)
    }

    /// Retrieves a stored task.
    ///
    /// Returns `Ok(None)` when no task has the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCreationError::Repository`] when the lookup fails.
    pub async fn find_task(&self, id: TaskId) -> TaskCreationResult<Option<Task>> {
        Ok(self.repository.find_by_id(id).await?)
    }
}
