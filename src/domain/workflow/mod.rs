//! Workflow module - the step-gated furniture configuration wizard.
//!
//! An explicit finite-state machine: `Dimensions -> Components ->
//! Materials -> Hardware`, strictly linear, with the terminal action
//! pricing the item and emitting a [`crate::domain::quotation::FurnitureItem`].

mod step;
mod workflow;

pub use step::ConfigStep;
pub use workflow::{FurnitureWorkflow, WorkflowState};
