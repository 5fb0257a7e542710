//! Repository port for project persistence and lookup.

use crate::project::domain::{Project, ProjectFilter, ProjectId};
use crate::store::StoreResult;
use async_trait::async_trait;

/// Project persistence contract.
///
/// Implementations enforce project name uniqueness ignoring case.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Stores a new project.
    ///
    /// # Errors
    ///
    /// Returns [`crate::store::StoreError::DuplicateKey`] when the project ID
    /// already exists or another project uses the same name ignoring case.
    async fn store(&self, project: &Project) -> StoreResult<()>;

    /// Persists changes to an existing project.
    ///
    /// # Errors
    ///
    /// Returns [`crate::store::StoreError::NotFound`] when the project does
    /// not exist or [`crate::store::StoreError::DuplicateKey`] when another
    /// project uses the new name ignoring case.
    async fn update(&self, project: &Project) -> StoreResult<()>;

    /// Finds a project by identifier.
    ///
    /// Returns `None` when the project does not exist.
    async fn find_by_id(&self, id: ProjectId) -> StoreResult<Option<Project>>;

    /// Finds a project whose name equals `name` exactly.
    ///
    /// Returns `None` when no project has that name.
    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Project>>;

    /// Returns every project matching the filter, in insertion order.
    async fn list(&self, filter: &ProjectFilter) -> StoreResult<Vec<Project>>;

    /// Deletes a project.
    ///
    /// # Errors
    ///
    /// Returns [`crate::store::StoreError::NotFound`] when the project does
    /// not exist.
    async fn delete(&self, id: ProjectId) -> StoreResult<()>;
}
