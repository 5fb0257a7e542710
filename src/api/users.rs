//! User routes.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::{JsonRejection, QueryRejection}},
};
use serde::Deserialize;
use serde_json::Value;

use super::{ApiResult, AppState, Backend};
use crate::user::domain::{User, UserFilter, UserId};

/// Query parameters accepted by `GET /users`.
#[derive(Debug, Default, Deserialize)]
pub struct UserQuery {
    /// `false` lists inactive users, any other non-empty value active ones.
    pub active: Option<String>,
}

impl UserQuery {
    /// Returns the listing filter for the query.
    #[must_use]
    pub fn filter(&self) -> UserFilter {
        match self.active.as_deref() {
            None | Some("") => UserFilter::default(),
            Some("false") => UserFilter::active(false),
            Some(_) => UserFilter::active(true),
        }
    }
}

/// `GET /users`
pub async fn list<B: Backend>(
    State(state): State<AppState<B>>,
    params: Result<Query<UserQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<User>>> {
    let Query(query) = params?;
    Ok(Json(state.users.list(&query.filter()).await?))
}

/// `GET /users/{id}`
pub async fn get<B: Backend>(
    State(state): State<AppState<B>>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<User>> {
    let id: UserId = raw_id.parse()?;
    Ok(Json(state.users.get(id).await?))
}

/// `PUT /users/{id}`
pub async fn update<B: Backend>(
    State(state): State<AppState<B>>,
    Path(raw_id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<User>> {
    let id: UserId = raw_id.parse()?;
    let Json(body) = payload?;
    Ok(Json(state.users.update_active(id, &body).await?))
}
