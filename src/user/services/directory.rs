//! Service layer for user listing, lookup and activation.

use crate::{
    error::{Classify, ErrorKind},
    store::StoreError,
    user::{
        domain::{User, UserFilter, UserId},
        ports::UserRepository,
    },
    validation::ValidationError,
};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

use super::validation::validate_active_update;

/// Service-level errors for user operations.
#[derive(Debug, Error)]
pub enum UserServiceError {
    /// Request validation failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The user does not exist.
    #[error("user not found: {0}")]
    NotFound(UserId),
    /// Repository operation failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl Classify for UserServiceError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Store(err) => err.kind(),
        }
    }
}

/// Result type for user service operations.
pub type UserServiceResult<T> = Result<T, UserServiceError>;

/// User directory service.
pub struct UserService<R>
where
    R: UserRepository,
{
    repository: Arc<R>,
}

impl<R> Clone for UserService<R>
where
    R: UserRepository,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> UserService<R>
where
    R: UserRepository,
{
    /// Creates a new user service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns every user matching the filter.
    ///
    /// # Errors
    ///
    /// Returns [`UserServiceError::Store`] when persistence lookup fails.
    pub async fn list(&self, filter: &UserFilter) -> UserServiceResult<Vec<User>> {
        Ok(self.repository.list(filter).await?)
    }

    /// Returns the user with the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`UserServiceError::NotFound`] when the user does not exist.
    pub async fn get(&self, id: UserId) -> UserServiceResult<User> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserServiceError::NotFound(id))
    }

    /// Updates a user's active flag from a request body.
    ///
    /// The user is looked up before the body is validated.
    ///
    /// # Errors
    ///
    /// Returns [`UserServiceError::NotFound`] when the user does not exist,
    /// [`UserServiceError::Validation`] when the body does not carry a boolean
    /// `active`, or [`UserServiceError::Store`] when persistence fails.
    pub async fn update_active(&self, id: UserId, body: &Value) -> UserServiceResult<User> {
        let mut user = self.get(id).await?;
        let active = validate_active_update(body).inspect_err(|err| {
            tracing::debug!(user_id = %id, error = %err, "rejected user update");
        })?;

        user.set_active(active);
        self.repository.update(&user).await?;
        tracing::info!(user_id = %id, active, "updated user active flag");
        Ok(user)
    }
}
