//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, ids, money, errors)
//! - `catalog` - Per-furniture-type option tables with pricing data
//! - `selection` - Dimension validation and component/hardware/material selectors
//! - `pricing` - Cost breakdown value objects
//! - `workflow` - The step-gated furniture configuration state machine
//! - `quotation` - Finalized furniture items and quotation aggregation
//! - `project` - Project and client records exchanged with the storage collaborator

pub mod catalog;
pub mod foundation;
pub mod pricing;
pub mod project;
pub mod quotation;
pub mod selection;
pub mod workflow;
