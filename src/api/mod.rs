//! HTTP surface.
//!
//! Every response body is JSON. Failures render as `{ "message": ... }` with
//! a status chosen from the failure's [`crate::error::ErrorKind`].

mod error;
mod index;
mod middleware;
pub mod projects;
mod state;
pub mod tasks;
pub mod users;

use axum::{Router, routing::get};

pub use error::{ApiError, ApiResult, MessageBody};
pub use middleware::trace_requests;
pub use state::{AppState, Backend, MemoryBackend, Tasks};

/// Builds the application router.
pub fn router<B: Backend>(state: AppState<B>) -> Router {
    Router::new()
        .route("/", get(index::index))
        .route(
            "/projects",
            get(projects::list::<B>).post(projects::create::<B>),
        )
        .route(
            "/projects/{id}",
            get(projects::get::<B>)
                .put(projects::update::<B>)
                .delete(projects::remove::<B>),
        )
        .route("/tasks", get(tasks::list::<B>).post(tasks::create::<B>))
        .route("/tasks/enum_status", get(tasks::status_values::<B>))
        .route("/tasks/enum_priority", get(tasks::priority_values::<B>))
        .route(
            "/tasks/{id}",
            get(tasks::get::<B>)
                .put(tasks::update::<B>)
                .delete(tasks::remove::<B>),
        )
        .route("/users", get(users::list::<B>))
        .route("/users/{id}", get(users::get::<B>).put(users::update::<B>))
        .fallback(not_found)
        .layer(axum::middleware::from_fn(trace_requests))
        .with_state(state)
}

#[expect(clippy::unused_async, reason = "axum handlers are async functions")]
async fn not_found() -> ApiError {
    ApiError::resource_not_found()
}
