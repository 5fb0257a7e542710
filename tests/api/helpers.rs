//! Shared helpers for router integration tests.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use mockable::DefaultClock;
use rstest::fixture;
use serde_json::Value;
use tower::ServiceExt;
use trackboard::{
    api::{self, AppState, MemoryBackend},
    project::{
        adapters::memory::InMemoryProjectRepository, domain::Project, ports::ProjectRepository,
    },
    task::{
        adapters::memory::InMemoryTaskRepository,
        domain::{Task, TaskPriority, TaskStatus, Timeline},
        ports::TaskRepository,
        services::TaskValidationConfig,
    },
    user::{adapters::memory::InMemoryUserRepository, domain::User, ports::UserRepository},
};

/// A router over fresh in-memory repositories with direct store handles.
pub struct TestApp {
    pub router: Router,
    pub users: Arc<InMemoryUserRepository>,
    pub projects: Arc<InMemoryProjectRepository>,
    pub tasks: Arc<InMemoryTaskRepository>,
}

/// Provides an application with empty stores.
#[fixture]
pub fn app() -> TestApp {
    let users = Arc::new(InMemoryUserRepository::new());
    let projects = Arc::new(InMemoryProjectRepository::new());
    let tasks = Arc::new(InMemoryTaskRepository::new());
    let state = AppState::<MemoryBackend>::new(
        Arc::clone(&users),
        Arc::clone(&projects),
        Arc::clone(&tasks),
        Arc::new(DefaultClock),
        TaskValidationConfig::default(),
    );
    TestApp {
        router: api::router(state),
        users,
        projects,
        tasks,
    }
}

impl TestApp {
    /// Sends a request and returns the status with the decoded JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built, the router fails, or
    /// the response body is not JSON.
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        body: Option<&Value>,
    ) -> eyre::Result<(StatusCode, Value)> {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))?,
            None => builder.body(Body::empty())?,
        };
        self.send_request(request).await
    }

    /// Sends a prepared request.
    ///
    /// # Errors
    ///
    /// Returns an error if the router fails or the body is not JSON.
    pub async fn send_request(
        &self,
        request: Request<Body>,
    ) -> eyre::Result<(StatusCode, Value)> {
        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let bytes = response.into_body().collect().await?.to_bytes();
        let json = serde_json::from_slice(&bytes)?;
        Ok((status, json))
    }

    /// Stores a user and returns it.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the user.
    pub async fn add_user(&self, user: User) -> eyre::Result<User> {
        self.users.store(&user).await?;
        Ok(user)
    }

    /// Stores a project managed by `manager` and returns it.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the project.
    pub async fn add_project(&self, name: &str, manager: &User) -> eyre::Result<Project> {
        let project = Project::new(name, "Seeded project", "git://seeded", manager.id());
        self.projects.store(&project).await?;
        Ok(project)
    }

    /// Stores a task in `status` for `project` and returns it.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the task.
    pub async fn add_task(
        &self,
        project: &Project,
        status: TaskStatus,
    ) -> eyre::Result<Task> {
        let task = Task::new(
            "Seeded task",
            TaskPriority::Medium,
            status,
            Timeline::placeholder(),
            project.id(),
        );
        self.tasks.store(&task).await?;
        Ok(task)
    }
}

/// Inserts `value` under `key` when `body` is a JSON object.
pub fn set_field(body: &mut Value, key: &str, value: Value) {
    if let Some(fields) = body.as_object_mut() {
        fields.insert(key.to_owned(), value);
    }
}

/// Returns the `message` field of an error body.
#[must_use]
pub fn message(body: &Value) -> &str {
    body.get("message").and_then(Value::as_str).unwrap_or_default()
}
