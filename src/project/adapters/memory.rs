//! In-memory project repository.

use async_trait::async_trait;

use crate::project::{
    domain::{Project, ProjectFilter, ProjectId},
    ports::ProjectRepository,
};
use crate::store::{MemoryCollection, StoreError, StoreResult};

/// Thread-safe in-memory project repository.
///
/// Names are unique ignoring case, matching a unique index with a
/// case-insensitive collation.
#[derive(Debug, Clone)]
pub struct InMemoryProjectRepository {
    projects: MemoryCollection<ProjectId, Project>,
}

impl InMemoryProjectRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            projects: MemoryCollection::new("project"),
        }
    }
}

impl Default for InMemoryProjectRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns a duplicate-name error when `existing` collides with `name`.
fn name_clash(name: &str) -> impl Fn(&Project) -> Option<StoreError> + '_ {
    let folded = name.to_lowercase();
    move |existing| {
        (existing.name().to_lowercase() == folded).then(|| StoreError::DuplicateKey {
            collection: "project",
            key: "name",
            value: name.to_owned(),
        })
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn store(&self, project: &Project) -> StoreResult<()> {
        self.projects
            .insert_with(project.id(), project.clone(), name_clash(project.name()))
    }

    async fn update(&self, project: &Project) -> StoreResult<()> {
        self.projects
            .replace_with(&project.id(), project.clone(), name_clash(project.name()))
    }

    async fn find_by_id(&self, id: ProjectId) -> StoreResult<Option<Project>> {
        self.projects.get(&id)
    }

    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Project>> {
        self.projects.find_first(|project| project.name() == name)
    }

    async fn list(&self, filter: &ProjectFilter) -> StoreResult<Vec<Project>> {
        self.projects.filter(|project| filter.matches(project))
    }

    async fn delete(&self, id: ProjectId) -> StoreResult<()> {
        self.projects.remove(&id).map(|_| ())
    }
}
