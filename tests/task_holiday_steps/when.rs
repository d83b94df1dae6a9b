//! When steps for holiday validation BDD scenarios.

use super::world::{TaskHolidayWorld, run_async};
use rstest_bdd_macros::when;

#[when("the task is created")]
fn create_task(world: &mut TaskHolidayWorld) -> Result<(), eyre::Report> {
    let request = world
        .pending_request
        .clone()
        .ok_or_else(|| eyre::eyre!("missing pending request in scenario world"))?;
    let result = run_async(world.service.create_task(request));
    world.last_result = Some(result);
    Ok(())
}
