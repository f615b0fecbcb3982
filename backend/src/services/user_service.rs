//! User business logic service.
//!
//! Owns credential hashing and the persistence side of user creation and
//! authentication. Plaintext passwords enter this module and never leave it.

use crate::database::models::{CreateNewUser, CreateUser, User};
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::user_repository::UserRepository;
use bcrypt::{DEFAULT_COST, hash, verify};
use sqlx::SqlitePool;
use uuid::Uuid;

pub struct UserService<'a> {
    /// Shared database connection pool
    pool: &'a SqlitePool,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates a new user record, hashing the supplied password.
    ///
    /// # Arguments
    /// * `create_user` - User creation data with plaintext password
    ///
    /// # Returns
    /// The newly created User with all fields populated
    ///
    /// # Errors
    /// Returns `ServiceError` if hashing or the insert fails
    pub async fn create_user(&self, create_user: CreateNewUser) -> ServiceResult<User> {
        let password_hash = Self::hash_password(&create_user.password)?;

        let data = CreateUser {
            id: Uuid::now_v7().to_string(),
            first_name: create_user.first_name,
            last_name: create_user.last_name,
            email: create_user.email,
            password_hash,
        };

        let repo = UserRepository::new(self.pool);
        let user = repo.create_user(data).await?;
        Ok(user)
    }

    /// Looks up a user by email and checks the password against the stored
    /// hash.
    ///
    /// The email is used exactly as supplied. An unknown email and a wrong
    /// password produce the same error so callers cannot tell which failed.
    ///
    /// # Errors
    /// `ServiceError::InvalidCredentials` on lookup or verification failure
    pub async fn authenticate_user(&self, email: &str, password: &str) -> ServiceResult<User> {
        let repo = UserRepository::new(self.pool);
        let user = repo
            .get_user_by_email(email)
            .await?
            .ok_or(ServiceError::InvalidCredentials)?;

        if Self::verify_password(password, &user.password_hash)? {
            Ok(user)
        } else {
            Err(ServiceError::InvalidCredentials)
        }
    }

    /// Function to hash a password before storing in database.
    ///
    /// Salted per call, so the same plaintext yields a different hash each
    /// time.
    fn hash_password(password: &str) -> ServiceResult<String> {
        hash(password, DEFAULT_COST)
            .map_err(|e| ServiceError::internal(format!("Password hashing failed: {}", e)))
    }

    /// Function to verify a password against the stored hash.
    ///
    /// Returns `false` on mismatch; errors only on a malformed hash.
    fn verify_password(password: &str, hash: &str) -> ServiceResult<bool> {
        verify(password, hash)
            .map_err(|e| ServiceError::internal(format!("Password verification failed: {}", e)))
    }
}
