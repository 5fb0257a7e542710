//! Project routes.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::{JsonRejection, QueryRejection}},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::Value;

use super::{ApiResult, AppState, Backend, MessageBody};
use crate::project::domain::{Project, ProjectDetail, ProjectFilter, ProjectId, ProjectListing};

/// Query parameters accepted by `GET /projects`.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectQuery {
    /// Case-insensitive name fragment; empty means no filter.
    pub name: Option<String>,
}

/// `GET /projects`
pub async fn list<B: Backend>(
    State(state): State<AppState<B>>,
    params: Result<Query<ProjectQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<ProjectListing>>> {
    let Query(ProjectQuery { name }) = params?;
    let filter = name
        .filter(|fragment| !fragment.is_empty())
        .map_or_else(ProjectFilter::default, ProjectFilter::name_contains);
    Ok(Json(state.projects.list(&filter).await?))
}

/// `GET /projects/{id}`
pub async fn get<B: Backend>(
    State(state): State<AppState<B>>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<ProjectDetail>> {
    let id: ProjectId = raw_id.parse()?;
    Ok(Json(state.projects.get(id).await?))
}

/// `POST /projects`
pub async fn create<B: Backend>(
    State(state): State<AppState<B>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Project>)> {
    let Json(body) = payload?;
    let project = state.projects.create(&body).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// `PUT /projects/{id}`
pub async fn update<B: Backend>(
    State(state): State<AppState<B>>,
    Path(raw_id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Project>> {
    let id: ProjectId = raw_id.parse()?;
    let Json(body) = payload?;
    Ok(Json(state.projects.update(id, &body).await?))
}

/// `DELETE /projects/{id}`
pub async fn remove<B: Backend>(
    State(state): State<AppState<B>>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<MessageBody>> {
    let id: ProjectId = raw_id.parse()?;
    state.projects.remove(id).await?;
    Ok(Json(MessageBody::new(format!("project {id} deleted"))))
}
