//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ProjectStore` - record storage and PDF rendering collaborator
//! - `IdentityProvider` - current-user lookup, display purposes only
//! - [`PriceCalculator`] - the pricing strategy, defined with the pricing
//!   domain and re-exported here as the seam adapters implement

mod identity;
mod project_store;

pub use identity::IdentityProvider;
pub use project_store::ProjectStore;

pub use crate::domain::pricing::PriceCalculator;
