//! Project module - records exchanged with the storage collaborator.
//!
//! The engine persists nothing itself; these types describe what the
//! record-storage collaborator accepts and returns.

mod project;

pub use project::{Client, NewProject, Project, ProjectStatus};
