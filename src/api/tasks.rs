//! Task routes.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::{JsonRejection, QueryRejection}},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::Value;

use super::{ApiResult, AppState, Backend, MessageBody, Tasks};
use crate::{
    project::domain::ProjectId,
    task::domain::{Task, TaskDetail, TaskFilter, TaskId},
    user::domain::UserId,
};

/// Query parameters accepted by `GET /tasks`.
#[derive(Debug, Default, Deserialize)]
pub struct TaskQuery {
    /// Only tasks of this project.
    pub project_id: Option<String>,
    /// Only tasks assigned to this user.
    pub user_id: Option<String>,
}

/// `GET /tasks`
pub async fn list<B: Backend>(
    State(state): State<AppState<B>>,
    params: Result<Query<TaskQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<Task>>> {
    let Query(TaskQuery {
        project_id,
        user_id,
    }) = params?;
    let filter = TaskFilter {
        project_id: project_id.as_deref().map(str::parse::<ProjectId>).transpose()?,
        user_id: user_id.as_deref().map(str::parse::<UserId>).transpose()?,
    };
    Ok(Json(state.tasks.list(&filter).await?))
}

/// `GET /tasks/enum_status`
#[expect(clippy::unused_async, reason = "axum handlers are async functions")]
pub async fn status_values<B: Backend>() -> Json<[&'static str; 4]> {
    Json(Tasks::<B>::status_values())
}

/// `GET /tasks/enum_priority`
#[expect(clippy::unused_async, reason = "axum handlers are async functions")]
pub async fn priority_values<B: Backend>() -> Json<[&'static str; 3]> {
    Json(Tasks::<B>::priority_values())
}

/// `GET /tasks/{id}`
pub async fn get<B: Backend>(
    State(state): State<AppState<B>>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<TaskDetail>> {
    let id: TaskId = raw_id.parse()?;
    Ok(Json(state.tasks.get(id).await?))
}

/// `POST /tasks`
pub async fn create<B: Backend>(
    State(state): State<AppState<B>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Task>)> {
    let Json(body) = payload?;
    let task = state.tasks.create(&body).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// `PUT /tasks/{id}`
pub async fn update<B: Backend>(
    State(state): State<AppState<B>>,
    Path(raw_id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Task>> {
    let id: TaskId = raw_id.parse()?;
    let Json(body) = payload?;
    Ok(Json(state.tasks.update(id, &body).await?))
}

/// `DELETE /tasks/{id}`
pub async fn remove<B: Backend>(
    State(state): State<AppState<B>>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<MessageBody>> {
    let id: TaskId = raw_id.parse()?;
    state.tasks.remove(id).await?;
    Ok(Json(MessageBody::new(format!("task {id} deleted"))))
}
