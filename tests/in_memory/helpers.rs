//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use caseworker_tasks::{
    holiday::{
        adapters::StaticHolidaySource,
        domain::{HolidayEvent, HolidaySnapshot, RegionId, RegionalCalendar},
        services::{HolidayCache, HolidayCacheConfig, HolidayChecker},
    },
    task::{
        adapters::memory::InMemoryTaskRepository,
        services::{TaskCreationConfig, TaskCreationService},
    },
};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use mockable::DefaultClock;
use rstest::fixture;

/// Service type wired entirely from in-memory adapters.
pub type TestService =
    TaskCreationService<InMemoryTaskRepository<DefaultClock>, StaticHolidaySource, DefaultClock>;

/// In-memory service together with handles to its collaborators.
pub struct Harness {
    pub service: TestService,
    pub repository: InMemoryTaskRepository<DefaultClock>,
    pub source: StaticHolidaySource,
}

/// Builds a harness over `source` for England and Wales.
#[must_use]
pub fn harness_over(source: StaticHolidaySource) -> Harness {
    let clock = Arc::new(DefaultClock);
    let repository = InMemoryTaskRepository::new(Arc::clone(&clock));
    let cache = HolidayCache::new(
        Arc::new(source.clone()),
        clock,
        HolidayCacheConfig::default(),
    );
    let service = TaskCreationService::new(
        Arc::new(repository.clone()),
        HolidayChecker::new(Arc::new(cache)),
        TaskCreationConfig::default(),
    );
    Harness {
        service,
        repository,
        source,
    }
}

/// Returns a calendar date, panicking on invalid input.
#[must_use]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// Returns a UTC timestamp on the hour.
#[must_use]
pub fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .expect("valid timestamp")
}

/// England and Wales calendar with Christmas and Boxing Day 2026.
#[fixture]
pub fn christmas_calendar() -> StaticHolidaySource {
    StaticHolidaySource::with_snapshot(HolidaySnapshot::from_calendars([
        RegionalCalendar::new(
            RegionId::england_and_wales(),
            "england-and-wales",
            [
                HolidayEvent::new("Christmas Day", date(2026, 12, 25)).with_bunting(true),
                HolidayEvent::new("Boxing Day", date(2026, 12, 26)).with_bunting(true),
            ],
        ),
    ]))
}

/// Harness over [`christmas_calendar`].
#[fixture]
pub fn harness(christmas_calendar: StaticHolidaySource) -> Harness {
    harness_over(christmas_calendar)
}
