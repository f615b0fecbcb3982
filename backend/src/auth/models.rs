//! Data structures for authentication-related requests and responses.

use crate::database::models::User;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Registration request payload.
///
/// Fields default to empty strings so an absent field and an empty one are
/// rejected the same way, with a single 400 response.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub first_name: String,

    #[serde(default)]
    #[validate(length(min = 1))]
    pub last_name: String,

    #[serde(default)]
    #[validate(length(min = 1))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1))]
    pub password: String,
}

/// Login request payload
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1))]
    pub password: String,
}

/// Public view of a user record returned by register and login.
///
/// The password hash is deliberately absent: the original API leaked the
/// full persisted record, hash included, and that is treated here as a bug
/// rather than a contract.
#[derive(Debug, Serialize)]
pub struct UserProfile {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub token: Option<String>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            token: user.token,
        }
    }
}
