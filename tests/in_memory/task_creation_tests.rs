//! In-memory integration tests for holiday-validated task creation.

use super::helpers::{Harness, at, date, harness, harness_over};
use caseworker_tasks::{
    holiday::adapters::StaticHolidaySource,
    task::{
        domain::{TaskDomainError, TaskStatus},
        services::{CreateTaskRequest, TaskCreationError, TaskResponse},
    },
};
use mockable::DefaultClock;
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn christmas_day_is_rejected_and_nothing_is_stored(harness: Harness) {
    let request = CreateTaskRequest::new("Review documents", TaskStatus::Pending, at(2026, 12, 25, 9));

    let result = harness.service.create_task(request).await;

    let Err(TaskCreationError::HolidayConflict(conflict)) = &result else {
        panic!("expected holiday conflict, got {result:?}");
    };
    assert_eq!(conflict.holiday_name(), "Christmas Day");
    assert_eq!(conflict.holiday_date(), date(2026, 12, 25));
    assert_eq!(
        conflict.to_string(),
        "Cannot create task on bank holiday: Christmas Day (2026-12-25)"
    );
    assert!(harness.repository.is_empty().expect("count should succeed"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn working_day_is_stored_with_identity_and_timestamps(harness: Harness) {
    let due_date = at(2026, 12, 28, 9);
    let request = CreateTaskRequest::new("Review documents", TaskStatus::Pending, due_date)
        .with_description("Review all submitted documents for case ABC123");

    let created = harness
        .service
        .create_task(request)
        .await
        .expect("task creation should succeed");
    let stored = harness
        .service
        .find_task(created.id())
        .await
        .expect("lookup should succeed");

    assert_eq!(stored.as_ref(), Some(&created));
    assert_eq!(created.title(), "Review documents");
    assert_eq!(
        created.description(),
        Some("Review all submitted documents for case ABC123")
    );
    assert_eq!(created.status(), TaskStatus::Pending);
    assert_eq!(created.due_date(), due_date);
    assert_eq!(created.created_at(), created.updated_at());

    let response = TaskResponse::from(&created);
    assert_eq!(response.id, created.id());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn outage_lets_holiday_dates_through() {
    let harness = harness_over(StaticHolidaySource::unavailable());
    let request = CreateTaskRequest::new("Review documents", TaskStatus::Pending, at(2026, 12, 25, 9));

    let created = harness.service.create_task(request).await;

    assert!(created.is_ok(), "outage should not block creation: {created:?}");
    assert_eq!(harness.repository.len().expect("count should succeed"), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn holiday_lookups_are_cached_across_requests(harness: Harness) {
    for day in [25, 26, 28, 29] {
        let request =
            CreateTaskRequest::new("Review documents", TaskStatus::InProgress, at(2026, 12, day, 9));
        let _result = harness.service.create_task(request).await;
    }

    assert_eq!(harness.source.fetch_count(), 1);
    assert_eq!(harness.repository.len().expect("count should succeed"), 2);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn invalid_request_is_stopped_before_creation(harness: Harness) {
    let requests = [
        CreateTaskRequest::new("", TaskStatus::Pending, at(2099, 1, 5, 9)),
        CreateTaskRequest::new("Review documents", TaskStatus::Pending, at(2099, 1, 5, 9)),
    ];

    let mut outcomes = Vec::new();
    for request in requests {
        let outcome = match request.validate(&DefaultClock) {
            Ok(()) => Ok(harness
                .service
                .create_task(request)
                .await
                .expect("valid request should be created")),
            Err(err) => Err(err),
        };
        outcomes.push(outcome);
    }

    assert!(matches!(
        outcomes.first(),
        Some(Err(TaskDomainError::EmptyTitle))
    ));
    let Some(Ok(created)) = outcomes.get(1) else {
        panic!("expected the valid request to be created, got {outcomes:?}");
    };
    assert_eq!(created.title(), "Review documents");
    assert_eq!(harness.repository.len().expect("count should succeed"), 1);
}
