//! Service layer for task listing, lookup, creation, update and removal.

use crate::{
    error::{Classify, ErrorKind},
    project::{
        domain::{ProjectId, ProjectSummary},
        ports::ProjectRepository,
    },
    store::{InvalidIdentifier, Projection, StoreError},
    task::{
        domain::{Task, TaskDetail, TaskFilter, TaskId, TaskPriority, TaskStatus, Timeline},
        ports::TaskRepository,
    },
    user::{domain::UserId, ports::UserRepository},
    validation::ValidationError,
};
use mockable::Clock;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

use super::validation::{TaskValidationConfig, TaskValidator};

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Request validation failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The task does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// The referenced user does not exist.
    #[error("user not found: {0}")]
    UserNotFound(UserId),
    /// The referenced project does not exist.
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),
    /// Repository operation failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<InvalidIdentifier> for TaskServiceError {
    fn from(err: InvalidIdentifier) -> Self {
        Self::Store(err.into())
    }
}

impl Classify for TaskServiceError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::NotFound(_) | Self::UserNotFound(_) | Self::ProjectNotFound(_) => {
                ErrorKind::NotFound
            }
            Self::Store(err) => err.kind(),
        }
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
pub struct TaskService<T, U, P, C>
where
    T: TaskRepository,
    U: UserRepository,
    P: ProjectRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    users: Arc<U>,
    projects: Arc<P>,
    clock: Arc<C>,
    config: TaskValidationConfig,
}

impl<T, U, P, C> Clone for TaskService<T, U, P, C>
where
    T: TaskRepository,
    U: UserRepository,
    P: ProjectRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            tasks: Arc::clone(&self.tasks),
            users: Arc::clone(&self.users),
            projects: Arc::clone(&self.projects),
            clock: Arc::clone(&self.clock),
            config: self.config,
        }
    }
}

impl<T, U, P, C> TaskService<T, U, P, C>
where
    T: TaskRepository,
    U: UserRepository,
    P: ProjectRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service with the default validation settings.
    #[must_use]
    pub fn new(tasks: Arc<T>, users: Arc<U>, projects: Arc<P>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            users,
            projects,
            clock,
            config: TaskValidationConfig::default(),
        }
    }

    /// Replaces the validation settings.
    #[must_use]
    pub const fn with_config(mut self, config: TaskValidationConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns every accepted status value.
    #[must_use]
    pub fn status_values() -> [&'static str; 4] {
        TaskStatus::values()
    }

    /// Returns every accepted priority value.
    #[must_use]
    pub fn priority_values() -> [&'static str; 3] {
        TaskPriority::values()
    }

    /// Returns every task matching the filter.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Store`] when persistence lookup fails.
    pub async fn list(&self, filter: &TaskFilter) -> TaskServiceResult<Vec<Task>> {
        Ok(self.tasks.list(filter).await?)
    }

    /// Returns a task with its user and project populated.
    ///
    /// Dangling references populate as `None`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist or
    /// [`TaskServiceError::Store`] when a lookup fails.
    pub async fn get(&self, id: TaskId) -> TaskServiceResult<TaskDetail> {
        let task = self.find(id).await?;
        let (user, project) = tokio::join!(
            async {
                match task.user_id() {
                    Some(user_id) => self.users.find_by_id(user_id).await,
                    None => Ok(None),
                }
            },
            self.projects.find_by_id(task.project_id()),
        );
        let summary = project?.as_ref().map(ProjectSummary::project);
        Ok(TaskDetail::new(task, user?, summary))
    }

    /// Validates a request body and stores a new task.
    ///
    /// # Errors
    ///
    /// Returns the validation, not-found or store failure that rejected the
    /// request. Nothing is written on failure.
    pub async fn create(&self, body: &Value) -> TaskServiceResult<Task> {
        let changes = self
            .validator()
            .validate(body, None)
            .await
            .inspect_err(|err| tracing::debug!(error = %err, "rejected task creation"))?;
        let name = changes.name.clone().ok_or(ValidationError::MissingField("name"))?;
        let priority = changes.priority.ok_or(ValidationError::MissingField("priority"))?;
        let status = changes.status.ok_or(ValidationError::MissingField("status"))?;
        let project_id = changes
            .project_id
            .ok_or(ValidationError::MissingField("project_id"))?;

        let mut task = Task::new(name, priority, status, Timeline::placeholder(), project_id);
        task.apply(changes);
        task.touch(&*self.clock);
        self.tasks.store(&task).await?;
        tracing::info!(task_id = %task.id(), project_id = %project_id, "created task");
        Ok(task)
    }

    /// Validates a request body against the stored task and applies it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist,
    /// otherwise the validation, not-found or store failure that rejected the
    /// request. Nothing is written on failure.
    pub async fn update(&self, id: TaskId, body: &Value) -> TaskServiceResult<Task> {
        let mut task = self.find(id).await?;
        let changes = self
            .validator()
            .validate(body, Some(&task))
            .await
            .inspect_err(|err| {
                tracing::debug!(task_id = %id, error = %err, "rejected task update");
            })?;

        task.apply(changes);
        task.touch(&*self.clock);
        self.tasks.update(&task).await?;
        tracing::info!(task_id = %id, status = %task.status(), "updated task");
        Ok(task)
    }

    /// Removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist or
    /// [`TaskServiceError::Store`] when persistence fails.
    pub async fn remove(&self, id: TaskId) -> TaskServiceResult<()> {
        self.tasks.delete(id).await.map_err(|err| match err {
            StoreError::NotFound { .. } => TaskServiceError::NotFound(id),
            other => other.into(),
        })?;
        tracing::info!(task_id = %id, "removed task");
        Ok(())
    }

    async fn find(&self, id: TaskId) -> TaskServiceResult<Task> {
        self.tasks
            .find_by_id(id)
            .await?
            .ok_or(TaskServiceError::NotFound(id))
    }

    fn validator(&self) -> TaskValidator<'_, U, P> {
        TaskValidator::new(&*self.users, &*self.projects, self.config)
    }
}
