//! In-memory adapters - storage and identity without external services.
//!
//! Back the ports with process-local state. Used by tests, demos, and
//! anywhere a real backend is not wired up yet.

mod identity;
mod project_store;

pub use identity::FixedIdentity;
pub use project_store::InMemoryProjectStore;
