//! Domain model for projects.

mod ids;
mod project;
mod views;

pub use ids::ProjectId;
pub use project::{Project, ProjectChanges, ProjectFilter, ProjectSummary};
pub use views::{ProjectDetail, ProjectListing};
