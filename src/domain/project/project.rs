//! Project and client records.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ClientId, Money, ProjectId, StateMachine, Timestamp};

/// Lifecycle status of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Draft,
    InProgress,
    Completed,
}

impl StateMachine for ProjectStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use ProjectStatus::*;
        matches!((self, target), (Draft, InProgress) | (InProgress, Completed))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use ProjectStatus::*;
        match self {
            Draft => vec![InProgress],
            InProgress => vec![Completed],
            Completed => vec![],
        }
    }
}

/// A client of the design studio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ClientId>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// A project record as held by the storage collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub client: Client,
    pub status: ProjectStatus,
    pub total_amount: Money,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// The fields required to create a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub client: Client,
}

impl Project {
    /// Creates a fresh draft project from a creation record.
    pub fn from_new(new: NewProject) -> Self {
        let now = Timestamp::now();
        Self {
            id: ProjectId::new(),
            title: new.title,
            description: new.description,
            client: new.client,
            status: ProjectStatus::Draft,
            total_amount: Money::ZERO,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_project() -> NewProject {
        NewProject {
            title: "3BHK Interiors".to_string(),
            description: "Full home furniture package".to_string(),
            client: Client {
                id: None,
                name: "R. Mehta".to_string(),
                email: "mehta@example.com".to_string(),
                phone: "+91 98000 00000".to_string(),
                address: "Baner, Pune".to_string(),
            },
        }
    }

    #[test]
    fn from_new_starts_as_a_zero_value_draft() {
        let project = Project::from_new(new_project());
        assert_eq!(project.status, ProjectStatus::Draft);
        assert_eq!(project.total_amount, Money::ZERO);
        assert_eq!(project.created_at, project.updated_at);
    }

    #[test]
    fn status_walks_draft_to_completed() {
        let status = ProjectStatus::Draft
            .transition_to(ProjectStatus::InProgress)
            .unwrap();
        let status = status.transition_to(ProjectStatus::Completed).unwrap();
        assert!(status.is_terminal());
    }

    #[test]
    fn draft_cannot_jump_straight_to_completed() {
        assert!(ProjectStatus::Draft
            .transition_to(ProjectStatus::Completed)
            .is_err());
    }

    #[test]
    fn status_serializes_to_snake_case() {
        assert_eq!(
            serde_json::to_string(&ProjectStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
    }
}
