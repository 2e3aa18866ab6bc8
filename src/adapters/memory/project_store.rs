//! In-memory project store adapter.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tokio::sync::RwLock;

use crate::domain::foundation::{
    DomainError, ErrorCode, Money, ProjectId, StateMachine, Timestamp,
};
use crate::domain::project::{NewProject, Project, ProjectStatus};
use crate::domain::quotation::FurnitureItem;
use crate::ports::ProjectStore;

/// Process-local project storage.
///
/// Holds projects and their saved furniture lists behind async locks so
/// the adapter can be shared across tasks. `render_pdf` emits the
/// quotation document as pretty-printed JSON bytes; a production
/// backend substitutes a real renderer behind the same port.
#[derive(Debug, Clone)]
pub struct InMemoryProjectStore {
    projects: Arc<RwLock<HashMap<ProjectId, Project>>>,
    furniture: Arc<RwLock<HashMap<ProjectId, Vec<FurnitureItem>>>>,
}

#[derive(Serialize)]
struct QuotationDocument<'a> {
    project: &'a Project,
    items: &'a [FurnitureItem],
}

impl InMemoryProjectStore {
    pub fn new() -> Self {
        Self {
            projects: Arc::new(RwLock::new(HashMap::new())),
            furniture: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored projects.
    pub async fn project_count(&self) -> usize {
        self.projects.read().await.len()
    }

    /// Saved furniture list for a project, if any.
    pub async fn saved_furniture(&self, id: &ProjectId) -> Option<Vec<FurnitureItem>> {
        self.furniture.read().await.get(id).cloned()
    }

    fn not_found(id: &ProjectId) -> DomainError {
        DomainError::new(ErrorCode::ProjectNotFound, "project not found")
            .with_detail("project_id", id.to_string())
    }
}

impl Default for InMemoryProjectStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProjectStore for InMemoryProjectStore {
    async fn list_projects(&self) -> Result<Vec<Project>, DomainError> {
        let projects = self.projects.read().await;
        let mut all: Vec<Project> = projects.values().cloned().collect();
        all.sort_by_key(|p| p.created_at);
        Ok(all)
    }

    async fn find_project(&self, id: &ProjectId) -> Result<Option<Project>, DomainError> {
        let projects = self.projects.read().await;
        Ok(projects.get(id).cloned())
    }

    async fn create_project(&self, new: NewProject) -> Result<Project, DomainError> {
        let project = Project::from_new(new);
        let mut projects = self.projects.write().await;
        projects.insert(project.id, project.clone());
        Ok(project)
    }

    async fn save_furniture(
        &self,
        project_id: &ProjectId,
        items: &[FurnitureItem],
    ) -> Result<(), DomainError> {
        let mut projects = self.projects.write().await;
        let project = projects
            .get_mut(project_id)
            .ok_or_else(|| Self::not_found(project_id))?;

        project.total_amount = items.iter().map(|item| item.costs.total()).sum::<Money>();
        if project.status == ProjectStatus::Draft {
            project.status = project
                .status
                .transition_to(ProjectStatus::InProgress)
                .map_err(DomainError::from)?;
        }
        project.updated_at = Timestamp::now();

        let mut furniture = self.furniture.write().await;
        furniture.insert(*project_id, items.to_vec());
        Ok(())
    }

    async fn render_pdf(&self, project_id: &ProjectId) -> Result<Vec<u8>, DomainError> {
        let projects = self.projects.read().await;
        let project = projects
            .get(project_id)
            .ok_or_else(|| Self::not_found(project_id))?;
        let furniture = self.furniture.read().await;
        let items = furniture.get(project_id).map(Vec::as_slice).unwrap_or(&[]);

        let document = QuotationDocument { project, items };
        serde_json::to_vec_pretty(&document).map_err(|e| {
            DomainError::new(ErrorCode::RenderError, "failed to render quotation document")
                .with_detail("cause", e.to_string())
        })
    }
}
