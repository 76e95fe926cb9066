use crate::shared::Result;
use crate::tracking::domain::{Component, Project};

/// ProjectRepository port for project-level operations on the tracking platform
///
/// Actions receive the repository as a parameter; nothing holds it globally.
pub trait ProjectRepository {
    /// Lists every project, following pagination to the end
    fn list_projects(&self) -> Result<Vec<Project>>;

    /// Lists the projects carrying `tag`
    fn list_projects_by_tag(&self, tag: &str) -> Result<Vec<Project>>;

    /// Deletes `project`
    ///
    /// # Returns
    /// Whether the platform reported success. A refusal, or a project
    /// without identifier, is `Ok(false)`; the caller decides what to do.
    fn delete_project(&self, project: &Project) -> Result<bool>;

    /// Lists the dependency components of `project` in platform order
    ///
    /// # Errors
    /// Returns `DtrackError::MissingIdentifier` when the project has no
    /// identifier, or any error of the underlying requests
    fn list_dependencies(&self, project: &Project) -> Result<Vec<Component>>;
}
