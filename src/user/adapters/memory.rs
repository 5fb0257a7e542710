//! In-memory user repository.

use async_trait::async_trait;

use crate::store::{MemoryCollection, StoreResult};
use crate::user::{
    domain::{User, UserFilter, UserId},
    ports::UserRepository,
};

/// Thread-safe in-memory user repository.
#[derive(Debug, Clone)]
pub struct InMemoryUserRepository {
    users: MemoryCollection<UserId, User>,
}

impl InMemoryUserRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            users: MemoryCollection::new("user"),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn store(&self, user: &User) -> StoreResult<()> {
        self.users.insert(user.id(), user.clone())
    }

    async fn update(&self, user: &User) -> StoreResult<()> {
        self.users.replace(&user.id(), user.clone())
    }

    async fn find_by_id(&self, id: UserId) -> StoreResult<Option<User>> {
        self.users.get(&id)
    }

    async fn list(&self, filter: &UserFilter) -> StoreResult<Vec<User>> {
        self.users.filter(|user| filter.matches(user))
    }
}
