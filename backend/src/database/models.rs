//! Rust structs that represent database table mappings.
//!
//! These models define the structure of data as it is stored in and retrieved
//! from the database. Note that these may differ from API-specific models;
//! in particular the password hash lives only here and on its DTOs, never on
//! anything serialized into a response.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    /// Stored lowercased; uniqueness is case-insensitive by construction.
    pub email: String,
    pub password_hash: String,
    /// Last-issued token, denormalized on the record.
    pub token: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Insert DTO carrying an already-hashed password.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
}

/// User creation input as the service layer receives it, plaintext password
/// included. Hashing happens inside `UserService::create_user`.
#[derive(Debug, Clone)]
pub struct CreateNewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}
