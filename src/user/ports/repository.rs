//! Repository port for user persistence and lookup.

use crate::store::StoreResult;
use crate::user::domain::{User, UserFilter, UserId};
use async_trait::async_trait;

/// User persistence contract.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Stores a new user.
    ///
    /// # Errors
    ///
    /// Returns [`crate::store::StoreError::DuplicateKey`] when the user ID
    /// already exists.
    async fn store(&self, user: &User) -> StoreResult<()>;

    /// Persists changes to an existing user.
    ///
    /// # Errors
    ///
    /// Returns [`crate::store::StoreError::NotFound`] when the user does not
    /// exist.
    async fn update(&self, user: &User) -> StoreResult<()>;

    /// Finds a user by identifier.
    ///
    /// Returns `None` when the user does not exist.
    async fn find_by_id(&self, id: UserId) -> StoreResult<Option<User>>;

    /// Returns every user matching the filter, in insertion order.
    async fn list(&self, filter: &UserFilter) -> StoreResult<Vec<User>>;
}
