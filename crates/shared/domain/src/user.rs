//! User, role and role assignment records.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// User domain entity.
///
/// Root identity for both instructors and students. The role a user plays
/// is recorded through [`UserRole`] assignments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

/// User creation data transfer object
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewUser {
    /// Unique login name
    #[validate(length(min = 1, max = 80))]
    pub username: String,
    /// Unique email address
    #[validate(length(min = 1, max = 120))]
    pub email: String,
    /// Password hash, computed by the caller
    #[validate(length(min = 1, max = 128))]
    pub password_hash: String,
}

impl NewUser {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password_hash: password_hash.into(),
        }
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// Unique user identifier
    pub id: i32,
    /// Login name
    pub username: String,
    /// Email address
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
        }
    }
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
        }
    }
}

/// Named role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: i32,
    pub name: String,
}

/// Role creation data transfer object
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewRole {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
}

impl NewRole {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Assignment of a role to a user.
///
/// The same pair may be assigned more than once; nothing in the schema
/// prevents it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRole {
    pub id: i32,
    pub user_id: i32,
    pub role_id: i32,
}
