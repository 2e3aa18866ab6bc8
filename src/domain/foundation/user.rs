//! User identity value objects.
//!
//! The engine has no auth logic of its own; the current user is fetched
//! from the identity collaborator for greeting and display purposes only.

use serde::{Deserialize, Serialize};

use super::UserId;

/// Role of a user within the design studio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Employee,
}

/// A user as reported by the identity collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: UserRole) -> Self {
        Self {
            id: UserId::new(),
            name: name.into(),
            email: email.into(),
            role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_to_snake_case() {
        assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"admin\"");
    }

    #[test]
    fn new_assigns_an_id() {
        let a = User::new("Asha", "asha@example.com", UserRole::Employee);
        let b = User::new("Asha", "asha@example.com", UserRole::Employee);
        assert_ne!(a.id, b.id);
    }
}
