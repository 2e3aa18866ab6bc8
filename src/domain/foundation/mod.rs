//! Foundation module - Shared domain primitives.
//!
//! Value objects and error types used across the domain layer.

mod errors;
mod furniture_type;
mod ids;
mod money;
mod state_machine;
mod tax_rate;
mod timestamp;
mod user;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use furniture_type::FurnitureType;
pub use ids::{ClientId, ItemId, ProjectId, UserId};
pub use money::Money;
pub use state_machine::StateMachine;
pub use tax_rate::TaxRate;
pub use timestamp::Timestamp;
pub use user::{User, UserRole};
