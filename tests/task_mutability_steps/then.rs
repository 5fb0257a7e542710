//! Then steps for task mutability BDD scenarios.

use super::world::{TaskMutabilityWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::then;
use trackboard::{
    task::{domain::TaskStatus, services::TaskServiceError},
    validation::ValidationError,
};

#[then("the update succeeds")]
fn update_succeeds(world: &TaskMutabilityWorld) -> Result<(), eyre::Report> {
    match world.last_update.as_ref() {
        Some(Ok(_)) => Ok(()),
        Some(Err(err)) => Err(eyre::eyre!("expected the update to succeed, got {err}")),
        None => Err(eyre::eyre!("missing update result")),
    }
}

#[then(r#"the update is rejected because "{field}" is not mutable"#)]
fn update_rejected(world: &TaskMutabilityWorld, field: String) -> Result<(), eyre::Report> {
    let result = world
        .last_update
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing update result"))?;

    match result {
        Err(TaskServiceError::Validation(ValidationError::FieldNotMutable {
            field: rejected,
            ..
        })) if *rejected == field => Ok(()),
        other => Err(eyre::eyre!(
            "expected FieldNotMutable for {field}, got {other:?}"
        )),
    }
}

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskMutabilityWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    let stored = run_async(world.service.get(world.task()?.id())).wrap_err("reload task")?;

    if stored.status != expected {
        return Err(eyre::eyre!(
            "expected status {expected}, found {}",
            stored.status
        ));
    }
    Ok(())
}

#[then(r#"the task name is "{name}""#)]
fn task_name_is(world: &TaskMutabilityWorld, name: String) -> Result<(), eyre::Report> {
    let stored = run_async(world.service.get(world.task()?.id())).wrap_err("reload task")?;

    if stored.name != name {
        return Err(eyre::eyre!("expected name {name}, found {}", stored.name));
    }
    Ok(())
}
