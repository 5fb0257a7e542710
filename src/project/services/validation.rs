//! Validation for project create and update requests.

use std::future::Future;
use std::str::FromStr;

use serde_json::Value;

use crate::{
    project::{domain::ProjectChanges, ports::ProjectRepository},
    store::{InvalidIdentifier, StoreResult},
    task::{domain::TaskId, ports::TaskRepository},
    user::{domain::UserId, ports::UserRepository},
    validation::{SanitizedRequest, Supplied, ValidationError, fields},
};

use super::{ProjectServiceError, ProjectServiceResult};

/// Fields a client may send when creating or updating a project.
pub const PROJECT_FIELDS: [&str; 6] = [
    "name",
    "description",
    "repository",
    "manager_id",
    "task_ids",
    "user_ids",
];

const REQUIRED_ON_CREATE: [&str; 4] = ["name", "description", "repository", "manager_id"];

/// Whether absent required fields are tolerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredFields {
    /// Create path: every stored field must be supplied and the name must be
    /// unused.
    Enforce,
    /// Update path: only supplied fields are checked.
    Bypass,
}

/// Validates project request bodies against the stores.
pub struct ProjectValidator<'a, P, U, T> {
    projects: &'a P,
    users: &'a U,
    tasks: &'a T,
}

impl<'a, P, U, T> ProjectValidator<'a, P, U, T>
where
    P: ProjectRepository,
    U: UserRepository,
    T: TaskRepository,
{
    /// Creates a validator reading references from the given repositories.
    #[must_use]
    pub const fn new(projects: &'a P, users: &'a U, tasks: &'a T) -> Self {
        Self {
            projects,
            users,
            tasks,
        }
    }

    /// Validates a request body.
    ///
    /// `task_ids` and `user_ids` are checked but not returned: both sets are
    /// derived from the tasks and users pointing at the project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::Validation`] for rejected input,
    /// [`ProjectServiceError::ManagerNotFound`],
    /// [`ProjectServiceError::TaskNotFound`] or
    /// [`ProjectServiceError::UserNotFound`] for dangling references, and
    /// [`ProjectServiceError::Store`] for malformed identifiers or lookup
    /// failures.
    pub async fn validate(
        &self,
        body: &Value,
        required: RequiredFields,
    ) -> ProjectServiceResult<ProjectChanges> {
        let request = SanitizedRequest::extract(&PROJECT_FIELDS, body)?;
        let missing = REQUIRED_ON_CREATE
            .into_iter()
            .find(|field| !request.get(field).is_present())
            .filter(|_| required == RequiredFields::Enforce);
        if let Some(field) = missing {
            return Err(ValidationError::MissingField(field).into());
        }

        let name = fields::text("name", request.get("name"))?;
        let description = fields::text("description", request.get("description"))?;
        let repository = fields::text("repository", request.get("repository"))?;
        let manager_id = fields::text("manager_id", request.get("manager_id"))?
            .map(str::parse::<UserId>)
            .transpose()?;
        let task_ids = references::<TaskId>("task_ids", request.get("task_ids"))?;
        let user_ids = references::<UserId>("user_ids", request.get("user_ids"))?;

        let unique_name = name.filter(|_| required == RequiredFields::Enforce);
        let (name_owner, manager, missing_task, missing_user) = tokio::join!(
            async {
                match unique_name {
                    Some(wanted) => self.projects.find_by_name(wanted).await,
                    None => Ok(None),
                }
            },
            async {
                match manager_id {
                    Some(id) => self.users.find_by_id(id).await,
                    None => Ok(None),
                }
            },
            first_missing(&task_ids, |id| self.tasks.find_by_id(id)),
            first_missing(&user_ids, |id| self.users.find_by_id(id)),
        );

        if let (Some(wanted), Some(_)) = (unique_name, name_owner?) {
            return Err(ValidationError::ProjectNameNotUnique(wanted.to_owned()).into());
        }
        if let (Some(id), None) = (manager_id, manager?) {
            return Err(ProjectServiceError::ManagerNotFound(id));
        }
        if let Some(id) = missing_task? {
            return Err(ProjectServiceError::TaskNotFound(id));
        }
        fields::ensure_distinct("task_ids", &task_ids)?;
        if let Some(id) = missing_user? {
            return Err(ProjectServiceError::UserNotFound(id));
        }
        fields::ensure_distinct("user_ids", &user_ids)?;

        Ok(ProjectChanges {
            name: name.map(str::to_owned),
            description: description.map(str::to_owned),
            repository: repository.map(str::to_owned),
            manager_id,
        })
    }
}

/// Parses a reference set; an absent set is empty.
fn references<I>(
    field: &'static str,
    supplied: Supplied<&Value>,
) -> ProjectServiceResult<Vec<I>>
where
    I: FromStr<Err = InvalidIdentifier>,
{
    let ids = fields::text_list(field, supplied)?.unwrap_or_default();
    Ok(ids
        .into_iter()
        .map(str::parse::<I>)
        .collect::<Result<Vec<_>, _>>()?)
}

/// Looks every identifier up in order and returns the first one missing.
async fn first_missing<I, R, F, Fut>(ids: &[I], find: F) -> StoreResult<Option<I>>
where
    I: Copy,
    F: Fn(I) -> Fut,
    Fut: Future<Output = StoreResult<Option<R>>>,
{
    for &id in ids {
        if find(id).await?.is_none() {
            return Ok(Some(id));
        }
    }
    Ok(None)
}
