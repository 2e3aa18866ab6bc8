//! Adapters - implementations of the ports.
//!
//! - `pricing` - cost calculator strategies
//! - `memory` - in-memory collaborators for tests and backend-less wiring

pub mod memory;
pub mod pricing;
