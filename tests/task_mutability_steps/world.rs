//! Shared world state for task mutability BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use trackboard::{
    project::{adapters::memory::InMemoryProjectRepository, domain::Project},
    task::{
        adapters::memory::InMemoryTaskRepository,
        domain::Task,
        services::{TaskService, TaskServiceError},
    },
    user::adapters::memory::InMemoryUserRepository,
};

/// Service type used by the BDD world.
pub type TestTaskService = TaskService<
    InMemoryTaskRepository,
    InMemoryUserRepository,
    InMemoryProjectRepository,
    DefaultClock,
>;

/// Scenario world for task mutability behaviour tests.
pub struct TaskMutabilityWorld {
    pub service: TestTaskService,
    pub users: Arc<InMemoryUserRepository>,
    pub projects: Arc<InMemoryProjectRepository>,
    pub project: Option<Project>,
    pub task: Option<Task>,
    pub last_update: Option<Result<Task, TaskServiceError>>,
}

impl TaskMutabilityWorld {
    /// Creates a world over empty stores.
    #[must_use]
    pub fn new() -> Self {
        let users = Arc::new(InMemoryUserRepository::new());
        let projects = Arc::new(InMemoryProjectRepository::new());
        let service = TaskService::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::clone(&users),
            Arc::clone(&projects),
            Arc::new(DefaultClock),
        );

        Self {
            service,
            users,
            projects,
            project: None,
            task: None,
            last_update: None,
        }
    }

    /// Returns the task created by a given step.
    ///
    /// # Errors
    ///
    /// Returns an error when no task has been created yet.
    pub fn task(&self) -> Result<&Task, eyre::Report> {
        self.task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))
    }
}

impl Default for TaskMutabilityWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskMutabilityWorld {
    TaskMutabilityWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
