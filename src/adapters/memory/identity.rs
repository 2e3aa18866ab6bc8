//! Fixed identity adapter.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, User};
use crate::ports::IdentityProvider;

/// Identity provider that always reports the same signed-in user.
#[derive(Debug, Clone)]
pub struct FixedIdentity {
    user: User,
}

impl FixedIdentity {
    pub fn new(user: User) -> Self {
        Self { user }
    }
}

#[async_trait]
impl IdentityProvider for FixedIdentity {
    async fn current_user(&self) -> Result<User, DomainError> {
        Ok(self.user.clone())
    }
}
