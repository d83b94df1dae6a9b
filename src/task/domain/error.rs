//! Error types for task domain validation and parsing.

use crate::holiday::domain::HolidayEvent;
use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

/// Errors returned while validating task field values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The title is empty after trimming.
    #[error("title is required")]
    EmptyTitle,

    /// The title exceeds the maximum length.
    #[error("title must be between 1 and {max} characters, got {length}")]
    TitleTooLong {
        /// Character count of the rejected title.
        length: usize,
        /// Maximum permitted character count.
        max: usize,
    },

    /// The description exceeds the maximum length.
    #[error("description must not exceed {max} characters, got {length}")]
    DescriptionTooLong {
        /// Character count of the rejected description.
        length: usize,
        /// Maximum permitted character count.
        max: usize,
    },

    /// The due date is not strictly after the validation time.
    #[error("due date must be in the future: {0}")]
    DueDateNotInFuture(DateTime<Utc>),
}

/// Error returned while parsing task statuses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// A task was due on a public holiday.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Cannot create task on bank holiday: {holiday_name} ({holiday_date})")]
pub struct HolidayConflict {
    holiday_name: String,
    holiday_date: NaiveDate,
}

impl HolidayConflict {
    /// Creates a conflict for the named holiday.
    #[must_use]
    pub fn new(holiday_name: impl Into<String>, holiday_date: NaiveDate) -> Self {
        Self {
            holiday_name: holiday_name.into(),
            holiday_date,
        }
    }

    /// Returns the holiday's human-readable name.
    #[must_use]
    pub fn holiday_name(&self) -> &str {
        &self.holiday_name
    }

    /// Returns the holiday date.
    #[must_use]
    pub const fn holiday_date(&self) -> NaiveDate {
        self.holiday_date
    }
}

impl From<&HolidayEvent> for HolidayConflict {
    fn from(event: &HolidayEvent) -> Self {
        Self::new(event.title(), event.date())
    }
}
