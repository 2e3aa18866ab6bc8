//! Identity port - current-user lookup.
//!
//! The engine has no auth logic; it consumes the current user for
//! greeting and display purposes only.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, User};

/// Identity collaborator providing the current user.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Returns the currently signed-in user.
    ///
    /// # Errors
    ///
    /// - `IdentityError` when no user is available
    async fn current_user(&self) -> Result<User, DomainError>;
}
