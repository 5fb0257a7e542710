//! Validation for task create and update requests.
//!
//! Checks run in a fixed order so the reported error is deterministic:
//! required fields (create only), field types and enumerations in whitelist
//! order, reference lookups, the user/project cross-reference check, and
//! finally the status gate.

use std::future::Future;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::{
    project::{domain::ProjectId, ports::ProjectRepository},
    store::{InvalidIdentifier, StoreResult},
    task::domain::{Task, TaskChanges, TaskField, TaskPriority, TaskStatus, Timeline},
    user::{domain::UserId, ports::UserRepository},
    validation::{SanitizedRequest, Supplied, ValidationError, fields},
};

use super::{TaskServiceError, TaskServiceResult};

/// Fields a client may send when creating or updating a task, in check order.
pub const TASK_FIELDS: [&str; 7] = [
    "name",
    "details",
    "priority",
    "status",
    "timeline",
    "user_id",
    "project_id",
];

const REQUIRED_ON_CREATE: [&str; 4] = ["name", "priority", "status", "project_id"];

/// Tunables for task validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskValidationConfig {
    /// Reject task creation without a timeline instead of attaching an
    /// all-empty placeholder.
    pub require_timeline_on_create: bool,
}

/// Validates task request bodies against the user and project stores.
pub struct TaskValidator<'a, U, P> {
    users: &'a U,
    projects: &'a P,
    config: TaskValidationConfig,
}

impl<'a, U, P> TaskValidator<'a, U, P>
where
    U: UserRepository,
    P: ProjectRepository,
{
    /// Creates a validator reading references from the given repositories.
    #[must_use]
    pub const fn new(users: &'a U, projects: &'a P, config: TaskValidationConfig) -> Self {
        Self {
            users,
            projects,
            config,
        }
    }

    /// Validates a request body.
    ///
    /// `current` is `None` on the create path and the stored task on the
    /// update path. On create without a timeline the placeholder timeline is
    /// attached unless the configuration requires one.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] for rejected input,
    /// [`TaskServiceError::UserNotFound`] or
    /// [`TaskServiceError::ProjectNotFound`] for dangling references, and
    /// [`TaskServiceError::Store`] for malformed identifiers or lookup
    /// failures.
    pub async fn validate(
        &self,
        body: &Value,
        current: Option<&Task>,
    ) -> TaskServiceResult<TaskChanges> {
        let request = SanitizedRequest::extract(&TASK_FIELDS, body)?;
        if current.is_none() {
            self.check_required(&request)?;
        }

        let name = fields::text("name", request.get("name"))?.map(str::to_owned);
        let details = fields::text("details", request.get("details"))?.map(str::to_owned);
        let priority = parse_priority(request.get("priority"))?;
        let status = parse_status(request.get("status"))?;
        let supplied_timeline = parse_timeline(request.get("timeline"))?;
        let user_id = reference::<UserId>("user_id", request.get("user_id"))?;
        let project_id = reference::<ProjectId>("project_id", request.get("project_id"))?;

        self.check_references(user_id, project_id).await?;
        if let Some(task) = current {
            check_mutable(&request, task)?;
        }

        let timeline = match (supplied_timeline, current) {
            (None, None) => Some(Timeline::placeholder()),
            (supplied, _) => supplied,
        };
        Ok(TaskChanges {
            name,
            details,
            priority,
            status,
            timeline,
            user_id,
            project_id,
        })
    }

    fn check_required(&self, request: &SanitizedRequest) -> Result<(), ValidationError> {
        if let Some(field) = REQUIRED_ON_CREATE
            .into_iter()
            .find(|field| !request.get(field).is_present())
        {
            return Err(ValidationError::MissingField(field));
        }
        if self.config.require_timeline_on_create && !request.get("timeline").is_present() {
            return Err(ValidationError::IncompleteTimeline);
        }
        Ok(())
    }

    /// Resolves both references concurrently, then inspects them user first.
    ///
    /// Only references supplied in this request are compared; the stored
    /// task's other reference is not consulted.
    async fn check_references(
        &self,
        user_id: Option<UserId>,
        project_id: Option<ProjectId>,
    ) -> TaskServiceResult<()> {
        let (user_lookup, project_lookup) = tokio::join!(
            lookup(user_id, |id| self.users.find_by_id(id)),
            lookup(project_id, |id| self.projects.find_by_id(id)),
        );
        let assignee = resolve(user_id, user_lookup?, TaskServiceError::UserNotFound)?;
        let owner = resolve(project_id, project_lookup?, TaskServiceError::ProjectNotFound)?;

        match (assignee, owner) {
            (Some(user), Some(project)) if user.project_id() != Some(project.id()) => {
                Err(ValidationError::CrossReferenceMismatch {
                    user: user.id().to_string(),
                    project: project.id().to_string(),
                }
                .into())
            }
            _ => Ok(()),
        }
    }
}

async fn lookup<I, R, F, Fut>(wanted: Option<I>, find: F) -> StoreResult<Option<R>>
where
    F: FnOnce(I) -> Fut,
    Fut: Future<Output = StoreResult<Option<R>>>,
{
    match wanted {
        Some(id) => find(id).await,
        None => Ok(None),
    }
}

fn resolve<I, R>(
    wanted: Option<I>,
    found: Option<R>,
    missing: fn(I) -> TaskServiceError,
) -> TaskServiceResult<Option<R>> {
    match (wanted, found) {
        (Some(id), None) => Err(missing(id)),
        (_, record) => Ok(record),
    }
}

fn reference<I>(field: &'static str, supplied: Supplied<&Value>) -> TaskServiceResult<Option<I>>
where
    I: FromStr<Err = InvalidIdentifier>,
{
    Ok(fields::text(field, supplied)?
        .map(str::parse::<I>)
        .transpose()?)
}

fn describe(value: &Value) -> String {
    value
        .as_str()
        .map_or_else(|| value.to_string(), str::to_owned)
}

fn parse_priority(supplied: Supplied<&Value>) -> Result<Option<TaskPriority>, ValidationError> {
    let Some(value) = supplied.present() else {
        return Ok(None);
    };
    value
        .as_str()
        .and_then(|raw| TaskPriority::try_from(raw).ok())
        .map(Some)
        .ok_or_else(|| ValidationError::InvalidPriority {
            value: describe(value),
            allowed: TaskPriority::values().join(", "),
        })
}

fn parse_status(supplied: Supplied<&Value>) -> Result<Option<TaskStatus>, ValidationError> {
    let Some(value) = supplied.present() else {
        return Ok(None);
    };
    value
        .as_str()
        .and_then(|raw| TaskStatus::try_from(raw).ok())
        .map(Some)
        .ok_or_else(|| ValidationError::InvalidStatus {
            value: describe(value),
            allowed: TaskStatus::values().join(", "),
        })
}

/// Parses a supplied timeline. A client-sent `date_updated` is ignored.
fn parse_timeline(supplied: Supplied<&Value>) -> Result<Option<Timeline>, ValidationError> {
    let Some(value) = supplied.present() else {
        return Ok(None);
    };
    let map = value.as_object().ok_or(ValidationError::InvalidType {
        field: "timeline",
        expected: "an object",
    })?;
    let (Some(assigned), Some(due)) = (map.get("date_assigned"), map.get("date_due")) else {
        return Err(ValidationError::IncompleteTimeline);
    };
    Ok(Some(Timeline::new(
        parse_date("date_assigned", assigned)?,
        parse_date("date_due", due)?,
    )))
}

fn parse_date(
    field: &'static str,
    value: &Value,
) -> Result<Option<DateTime<Utc>>, ValidationError> {
    match value {
        Value::Null => Ok(None),
        Value::String(raw) => Timeline::parse_date(raw)
            .map(Some)
            .ok_or_else(|| ValidationError::InvalidDate {
                field,
                value: raw.clone(),
            }),
        other => Err(ValidationError::InvalidDate {
            field,
            value: other.to_string(),
        }),
    }
}

/// Applies the status gate: every supplied field must be mutable under the
/// stored task's policy.
fn check_mutable(request: &SanitizedRequest, task: &Task) -> Result<(), ValidationError> {
    let policy = task.mutation_policy();
    TaskField::ALL
        .into_iter()
        .find(|field| request.get(field.as_str()).is_present() && !policy.allows(*field))
        .map_or(Ok(()), |field| {
            Err(ValidationError::FieldNotMutable {
                field: field.as_str(),
                status: task.status().to_string(),
            })
        })
}
