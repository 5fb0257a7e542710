//! Start-up snapshot loader.
//!
//! A snapshot is a JSON document with `users`, `projects` and `tasks` arrays
//! of stored records. Records are written in that order, so references can
//! point at records earlier in the document.

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8::Dir};
use serde::Deserialize;
use thiserror::Error;

use crate::{
    project::{domain::Project, ports::ProjectRepository},
    store::StoreError,
    task::{domain::Task, ports::TaskRepository},
    user::{domain::User, ports::UserRepository},
};

/// Errors raised while loading a snapshot.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The snapshot file could not be read.
    #[error("failed to read seed snapshot {path}: {source}")]
    Read {
        /// Snapshot location.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The snapshot is not valid JSON of the expected shape.
    #[error("failed to parse seed snapshot: {0}")]
    Parse(#[from] serde_json::Error),
    /// A record could not be stored.
    #[error("failed to store seed record: {0}")]
    Store(#[from] StoreError),
}

/// Records to load into an empty store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Snapshot {
    /// User records.
    #[serde(default)]
    pub users: Vec<User>,
    /// Project records.
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Task records.
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Snapshot {
    /// Parses a snapshot document.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::Parse`] for malformed documents.
    pub fn from_json(raw: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads and parses the snapshot file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::Read`] when the file cannot be read and
    /// [`SeedError::Parse`] for malformed documents.
    pub fn read(path: &Utf8Path) -> Result<Self, SeedError> {
        let read_error = |source| SeedError::Read {
            path: path.to_string(),
            source,
        };
        let file_name = path
            .file_name()
            .ok_or_else(|| read_error(std::io::Error::other("path must include a file name")))?;
        let parent = path
            .parent()
            .filter(|dir| !dir.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));
        let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
        let raw = dir.read_to_string(file_name).map_err(read_error)?;
        Self::from_json(&raw)
    }

    /// Stores every record, users first, then projects, then tasks.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::Store`] when a record is rejected, for example a
    /// duplicate project name.
    pub async fn load<U, P, T>(&self, users: &U, projects: &P, tasks: &T) -> Result<(), SeedError>
    where
        U: UserRepository,
        P: ProjectRepository,
        T: TaskRepository,
    {
        for user in &self.users {
            users.store(user).await?;
        }
        for project in &self.projects {
            projects.store(project).await?;
        }
        for task in &self.tasks {
            tasks.store(task).await?;
        }
        tracing::info!(
            users = self.users.len(),
            projects = self.projects.len(),
            tasks = self.tasks.len(),
            "loaded seed snapshot"
        );
        Ok(())
    }
}
