//! When steps for task mutability BDD scenarios.

use super::world::{TaskMutabilityWorld, run_async};
use rstest_bdd_macros::when;
use serde_json::{Value, json};

fn submit_update(world: &mut TaskMutabilityWorld, body: &Value) -> Result<(), eyre::Report> {
    let id = world.task()?.id();
    let result = run_async(world.service.update(id, body));
    if let Ok(ref updated) = result {
        world.task = Some(updated.clone());
    }
    world.last_update = Some(result);
    Ok(())
}

#[when(r#"the task is updated with status "{status}""#)]
fn update_status(world: &mut TaskMutabilityWorld, status: String) -> Result<(), eyre::Report> {
    submit_update(world, &json!({ "status": status }))
}

#[when(r#"the task is renamed to "{name}""#)]
fn rename_task(world: &mut TaskMutabilityWorld, name: String) -> Result<(), eyre::Report> {
    submit_update(world, &json!({ "name": name }))
}
