//! Project store port - record storage and document rendering.
//!
//! The engine produces in-memory value objects; persisting them is the
//! caller's choice and this collaborator's job. No transport is assumed.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ProjectId};
use crate::domain::project::{NewProject, Project};
use crate::domain::quotation::FurnitureItem;

/// Record-storage collaborator for projects and their furniture lists.
///
/// # Contract
///
/// Implementations must:
/// - Preserve the order of a persisted furniture list
/// - Return `ProjectNotFound` for operations against unknown projects
/// - Surface transport failures as `StorageError` / `RenderError` without
///   partially applying a write
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Lists all projects.
    async fn list_projects(&self) -> Result<Vec<Project>, DomainError>;

    /// Fetches a project by identifier. Returns `None` if not found.
    async fn find_project(&self, id: &ProjectId) -> Result<Option<Project>, DomainError>;

    /// Creates a project record.
    async fn create_project(&self, new: NewProject) -> Result<Project, DomainError>;

    /// Persists a finalized furniture list against a project, replacing
    /// any previously saved list and rolling the project total forward.
    ///
    /// # Errors
    ///
    /// - `ProjectNotFound` if the project does not exist
    /// - `StorageError` on persistence failure
    async fn save_furniture(
        &self,
        project_id: &ProjectId,
        items: &[FurnitureItem],
    ) -> Result<(), DomainError>;

    /// Renders the project's quotation as an opaque binary document.
    ///
    /// # Errors
    ///
    /// - `ProjectNotFound` if the project does not exist
    /// - `RenderError` on rendering failure
    async fn render_pdf(&self, project_id: &ProjectId) -> Result<Vec<u8>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn ProjectStore) {}
    }
}
