//! Service layer for project listing, lookup, creation, update and removal.
//!
//! Relationship views (`manager`, `tasks`, `userCount`, `taskCount`) are
//! resolved from the repositories on every read and never stored.

use crate::{
    error::{Classify, ErrorKind},
    project::{
        domain::{Project, ProjectChanges, ProjectDetail, ProjectFilter, ProjectId, ProjectListing},
        ports::ProjectRepository,
    },
    store::{InvalidIdentifier, Projection, StoreError},
    task::{
        domain::{TaskFilter, TaskId, TaskSummary},
        ports::TaskRepository,
    },
    user::{
        domain::{UserFilter, UserId},
        ports::UserRepository,
    },
    validation::{ValidationError, fields},
};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

use super::validation::{ProjectValidator, RequiredFields};

/// Service-level errors for project operations.
#[derive(Debug, Error)]
pub enum ProjectServiceError {
    /// Request validation failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The project does not exist.
    #[error("project not found: {0}")]
    NotFound(ProjectId),
    /// The referenced manager does not exist.
    #[error("manager not found: {0}")]
    ManagerNotFound(UserId),
    /// A referenced task does not exist.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
    /// A referenced user does not exist.
    #[error("user not found: {0}")]
    UserNotFound(UserId),
    /// Repository operation failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<InvalidIdentifier> for ProjectServiceError {
    fn from(err: InvalidIdentifier) -> Self {
        Self::Store(err.into())
    }
}

impl Classify for ProjectServiceError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::NotFound(_)
            | Self::ManagerNotFound(_)
            | Self::TaskNotFound(_)
            | Self::UserNotFound(_) => ErrorKind::NotFound,
            Self::Store(err) => err.kind(),
        }
    }
}

/// Result type for project service operations.
pub type ProjectServiceResult<T> = Result<T, ProjectServiceError>;

/// Reports a name collision raised by the store as a validation failure.
fn name_conflict(err: StoreError) -> ProjectServiceError {
    match err {
        StoreError::DuplicateKey {
            key: "name", value, ..
        } => ValidationError::ProjectNameNotUnique(value).into(),
        other => other.into(),
    }
}

/// Project registry service.
pub struct ProjectService<P, U, T>
where
    P: ProjectRepository,
    U: UserRepository,
    T: TaskRepository,
{
    projects: Arc<P>,
    users: Arc<U>,
    tasks: Arc<T>,
}

impl<P, U, T> Clone for ProjectService<P, U, T>
where
    P: ProjectRepository,
    U: UserRepository,
    T: TaskRepository,
{
    fn clone(&self) -> Self {
        Self {
            projects: Arc::clone(&self.projects),
            users: Arc::clone(&self.users),
            tasks: Arc::clone(&self.tasks),
        }
    }
}

impl<P, U, T> ProjectService<P, U, T>
where
    P: ProjectRepository,
    U: UserRepository,
    T: TaskRepository,
{
    /// Creates a new project service.
    #[must_use]
    pub const fn new(projects: Arc<P>, users: Arc<U>, tasks: Arc<T>) -> Self {
        Self {
            projects,
            users,
            tasks,
        }
    }

    /// Returns every project matching the filter with its manager populated.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::Store`] when persistence lookup fails.
    pub async fn list(&self, filter: &ProjectFilter) -> ProjectServiceResult<Vec<ProjectListing>> {
        let projects = self.projects.list(filter).await?;
        let mut listings = Vec::with_capacity(projects.len());
        for project in projects {
            let manager = self.users.find_by_id(project.manager_id()).await?;
            listings.push(ProjectListing { project, manager });
        }
        Ok(listings)
    }

    /// Returns a project with its relationships resolved.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::NotFound`] when the project does not
    /// exist or [`ProjectServiceError::Store`] when a lookup fails.
    pub async fn get(&self, id: ProjectId) -> ProjectServiceResult<ProjectDetail> {
        let project = self.find(id).await?;
        let (task_filter, user_filter) = (TaskFilter::in_project(id), UserFilter::in_project(id));
        let (manager, tasks, users) = tokio::join!(
            self.users.find_by_id(project.manager_id()),
            self.tasks.list(&task_filter),
            self.users.list(&user_filter),
        );
        let summaries = tasks?.iter().map(TaskSummary::project).collect();
        Ok(ProjectDetail::new(project, manager?, summaries, users?.len()))
    }

    /// Validates a request body and stores a new project.
    ///
    /// # Errors
    ///
    /// Returns the validation, not-found or store failure that rejected the
    /// request. A name already used by another project, ignoring case, is
    /// reported as [`ValidationError::ProjectNameNotUnique`].
    pub async fn create(&self, body: &Value) -> ProjectServiceResult<Project> {
        let changes = self
            .validator()
            .validate(body, RequiredFields::Enforce)
            .await
            .inspect_err(|err| tracing::debug!(error = %err, "rejected project creation"))?;
        let ProjectChanges {
            name,
            description,
            repository,
            manager_id,
        } = changes;

        let project = Project::new(
            fields::require("name", name)?,
            fields::require("description", description)?,
            fields::require("repository", repository)?,
            fields::require("manager_id", manager_id)?,
        );
        self.projects.store(&project).await.map_err(name_conflict)?;
        tracing::info!(project_id = %project.id(), name = project.name(), "created project");
        Ok(project)
    }

    /// Validates a request body and applies it to an existing project.
    ///
    /// The project must exist before the body is validated.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::NotFound`] when the project does not
    /// exist, otherwise the validation, not-found or store failure that
    /// rejected the request.
    pub async fn update(&self, id: ProjectId, body: &Value) -> ProjectServiceResult<Project> {
        let mut project = self.find(id).await?;
        let changes = self
            .validator()
            .validate(body, RequiredFields::Bypass)
            .await
            .inspect_err(|err| {
                tracing::debug!(project_id = %id, error = %err, "rejected project update");
            })?;

        project.apply(changes);
        self.projects.update(&project).await.map_err(name_conflict)?;
        tracing::info!(project_id = %id, "updated project");
        Ok(project)
    }

    /// Removes a project that no task or user references.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::NotFound`] when the project does not
    /// exist and [`ValidationError::ProjectInUse`] while it is still
    /// referenced.
    pub async fn remove(&self, id: ProjectId) -> ProjectServiceResult<()> {
        self.find(id).await?;
        let (task_filter, user_filter) = (TaskFilter::in_project(id), UserFilter::in_project(id));
        let (tasks, users) = tokio::join!(
            self.tasks.list(&task_filter),
            self.users.list(&user_filter),
        );
        let (task_refs, user_refs) = (tasks?.len(), users?.len());
        if task_refs > 0 || user_refs > 0 {
            return Err(ValidationError::ProjectInUse {
                project: id.to_string(),
                tasks: task_refs,
                users: user_refs,
            }
            .into());
        }

        self.projects.delete(id).await.map_err(|err| match err {
            StoreError::NotFound { .. } => ProjectServiceError::NotFound(id),
            other => other.into(),
        })?;
        tracing::info!(project_id = %id, "removed project");
        Ok(())
    }

    async fn find(&self, id: ProjectId) -> ProjectServiceResult<Project> {
        self.projects
            .find_by_id(id)
            .await?
            .ok_or(ProjectServiceError::NotFound(id))
    }

    fn validator(&self) -> ProjectValidator<'_, P, U, T> {
        ProjectValidator::new(&*self.projects, &*self.users, &*self.tasks)
    }
}
