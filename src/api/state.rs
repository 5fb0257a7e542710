//! Shared handler state.

use std::sync::Arc;

use mockable::{Clock, DefaultClock};

use crate::{
    project::{
        adapters::memory::InMemoryProjectRepository, ports::ProjectRepository,
        services::ProjectService,
    },
    task::{
        adapters::memory::InMemoryTaskRepository,
        ports::TaskRepository,
        services::{TaskService, TaskValidationConfig},
    },
    user::{adapters::memory::InMemoryUserRepository, ports::UserRepository, services::UserService},
};

/// Repository and clock types backing the HTTP surface.
pub trait Backend: Send + Sync + 'static {
    /// User repository.
    type Users: UserRepository + 'static;
    /// Project repository.
    type Projects: ProjectRepository + 'static;
    /// Task repository.
    type Tasks: TaskRepository + 'static;
    /// Clock stamping task updates.
    type Clock: Clock + Send + Sync + 'static;
}

/// In-memory repositories with the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryBackend;

impl Backend for MemoryBackend {
    type Users = InMemoryUserRepository;
    type Projects = InMemoryProjectRepository;
    type Tasks = InMemoryTaskRepository;
    type Clock = DefaultClock;
}

/// Task service over a backend's repositories.
pub type Tasks<B> = TaskService<
    <B as Backend>::Tasks,
    <B as Backend>::Users,
    <B as Backend>::Projects,
    <B as Backend>::Clock,
>;

/// Services shared by every handler.
pub struct AppState<B: Backend> {
    /// User directory.
    pub users: UserService<B::Users>,
    /// Project registry.
    pub projects: ProjectService<B::Projects, B::Users, B::Tasks>,
    /// Task service.
    pub tasks: Tasks<B>,
}

impl<B: Backend> AppState<B> {
    /// Wires the services over shared repository handles.
    #[must_use]
    pub fn new(
        users: Arc<B::Users>,
        projects: Arc<B::Projects>,
        tasks: Arc<B::Tasks>,
        clock: Arc<B::Clock>,
        task_config: TaskValidationConfig,
    ) -> Self {
        Self {
            users: UserService::new(Arc::clone(&users)),
            projects: ProjectService::new(
                Arc::clone(&projects),
                Arc::clone(&users),
                Arc::clone(&tasks),
            ),
            tasks: TaskService::new(tasks, users, projects, clock).with_config(task_config),
        }
    }
}

impl<B: Backend> Clone for AppState<B> {
    fn clone(&self) -> Self {
        Self {
            users: self.users.clone(),
            projects: self.projects.clone(),
            tasks: self.tasks.clone(),
        }
    }
}
