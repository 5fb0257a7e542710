//! In-memory task repository.

use async_trait::async_trait;

use crate::store::{MemoryCollection, StoreResult};
use crate::task::{
    domain::{Task, TaskFilter, TaskId},
    ports::TaskRepository,
};

/// Thread-safe in-memory task repository.
#[derive(Debug, Clone)]
pub struct InMemoryTaskRepository {
    tasks: MemoryCollection<TaskId, Task>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tasks: MemoryCollection::new("task"),
        }
    }
}

impl Default for InMemoryTaskRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn store(&self, task: &Task) -> StoreResult<()> {
        self.tasks.insert(task.id(), task.clone())
    }

    async fn update(&self, task: &Task) -> StoreResult<()> {
        self.tasks.replace(&task.id(), task.clone())
    }

    async fn find_by_id(&self, id: TaskId) -> StoreResult<Option<Task>> {
        self.tasks.get(&id)
    }

    async fn list(&self, filter: &TaskFilter) -> StoreResult<Vec<Task>> {
        self.tasks.filter(|task| filter.matches(task))
    }

    async fn delete(&self, id: TaskId) -> StoreResult<()> {
        self.tasks.remove(&id).map(|_| ())
    }
}
