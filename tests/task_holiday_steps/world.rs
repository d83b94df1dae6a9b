//! Shared world state for holiday validation BDD scenarios.

use std::sync::Arc;

use caseworker_tasks::{
    holiday::{
        adapters::StaticHolidaySource,
        domain::HolidaySnapshot,
        services::{HolidayCache, HolidayCacheConfig, HolidayChecker},
    },
    task::{
        adapters::memory::InMemoryTaskRepository,
        domain::Task,
        services::{CreateTaskRequest, TaskCreationConfig, TaskCreationError, TaskCreationService},
    },
};
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestTaskService =
    TaskCreationService<InMemoryTaskRepository<DefaultClock>, StaticHolidaySource, DefaultClock>;

/// Scenario world for holiday validation behaviour tests.
pub struct TaskHolidayWorld {
    pub service: TestTaskService,
    pub repository: InMemoryTaskRepository<DefaultClock>,
    pub calendar: StaticHolidaySource,
    pub pending_request: Option<CreateTaskRequest>,
    pub last_result: Option<Result<Task, TaskCreationError>>,
}

impl TaskHolidayWorld {
    /// Creates a world with an empty calendar and no pending request.
    #[must_use]
    pub fn new() -> Self {
        let clock = Arc::new(DefaultClock);
        let calendar = StaticHolidaySource::with_snapshot(HolidaySnapshot::default());
        let repository = InMemoryTaskRepository::new(Arc::clone(&clock));
        let cache = HolidayCache::new(
            Arc::new(calendar.clone()),
            clock,
            HolidayCacheConfig::default(),
        );
        let service = TaskCreationService::new(
            Arc::new(repository.clone()),
            HolidayChecker::new(Arc::new(cache)),
            TaskCreationConfig::default(),
        );

        Self {
            service,
            repository,
            calendar,
            pending_request: None,
            last_result: None,
        }
    }
}

impl Default for TaskHolidayWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskHolidayWorld {
    TaskHolidayWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
