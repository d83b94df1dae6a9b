//! Then steps for holiday validation BDD scenarios.

use super::world::TaskHolidayWorld;
use caseworker_tasks::task::{domain::Task, services::TaskCreationError};
use rstest_bdd_macros::then;

fn created_task(world: &TaskHolidayWorld) -> Result<&Task, eyre::Report> {
    match world.last_result.as_ref() {
        Some(Ok(task)) => Ok(task),
        Some(Err(err)) => Err(eyre::eyre!("expected task creation to succeed, got {err}")),
        None => Err(eyre::eyre!("missing creation result")),
    }
}

#[then(r#"creation fails with a holiday conflict for "{name}" on "{date}""#)]
fn creation_fails_with_holiday_conflict(
    world: &TaskHolidayWorld,
    name: String,
    date: String,
) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing creation result"))?;

    let Err(TaskCreationError::HolidayConflict(conflict)) = result else {
        return Err(eyre::eyre!("expected HolidayConflict error, got {result:?}"));
    };
    eyre::ensure!(
        conflict.holiday_name() == name,
        "expected holiday {name}, found {}",
        conflict.holiday_name()
    );
    eyre::ensure!(
        conflict.holiday_date().to_string() == date,
        "expected holiday date {date}, found {}",
        conflict.holiday_date()
    );
    Ok(())
}

#[then("no task is stored")]
fn no_task_is_stored(world: &TaskHolidayWorld) -> Result<(), eyre::Report> {
    let stored = world
        .repository
        .len()
        .map_err(|err| eyre::eyre!("count stored tasks: {err}"))?;
    eyre::ensure!(stored == 0, "expected no stored tasks, found {stored}");
    Ok(())
}

#[then("the task is stored with an assigned identifier")]
fn task_is_stored(world: &TaskHolidayWorld) -> Result<(), eyre::Report> {
    let task = created_task(world)?;
    let stored = super::world::run_async(world.service.find_task(task.id()))
        .map_err(|err| eyre::eyre!("look up created task: {err}"))?;
    eyre::ensure!(
        stored.as_ref() == Some(task),
        "created task {} was not found in the repository",
        task.id()
    );
    Ok(())
}

#[then("the task creation and update timestamps are equal")]
fn timestamps_are_equal(world: &TaskHolidayWorld) -> Result<(), eyre::Report> {
    let task = created_task(world)?;
    eyre::ensure!(
        task.created_at() == task.updated_at(),
        "created_at {} differs from updated_at {}",
        task.created_at(),
        task.updated_at()
    );
    Ok(())
}
