//! Repository port for task persistence and lookup.

use crate::store::StoreResult;
use crate::task::domain::{Task, TaskFilter, TaskId};
use async_trait::async_trait;

/// Task persistence contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`crate::store::StoreError::DuplicateKey`] when the task ID
    /// already exists.
    async fn store(&self, task: &Task) -> StoreResult<()>;

    /// Persists changes to an existing task (fields, status, timeline).
    ///
    /// # Errors
    ///
    /// Returns [`crate::store::StoreError::NotFound`] when the task does not
    /// exist.
    async fn update(&self, task: &Task) -> StoreResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> StoreResult<Option<Task>>;

    /// Returns every task matching the filter, in insertion order.
    async fn list(&self, filter: &TaskFilter) -> StoreResult<Vec<Task>>;

    /// Removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`crate::store::StoreError::NotFound`] when the task does not
    /// exist.
    async fn delete(&self, id: TaskId) -> StoreResult<()>;
}
