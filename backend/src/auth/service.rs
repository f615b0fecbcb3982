//! Core business logic for the authentication flows.

use crate::auth::models::{LoginRequest, RegisterRequest, UserProfile};
use crate::database::models::CreateNewUser;
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::user_repository::UserRepository;
use crate::services::user_service::UserService;
use crate::utils::jwt::JwtUtils;
use sqlx::SqlitePool;
use std::sync::Arc;
use validator::Validate;

/// Authentication service for handling registration and login.
pub struct AuthService<'a> {
    pool: &'a SqlitePool,
    jwt_utils: Arc<JwtUtils>,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService instance with its injected dependencies.
    pub fn new(pool: &'a SqlitePool, jwt_utils: Arc<JwtUtils>) -> Self {
        AuthService { pool, jwt_utils }
    }

    /// Register a new user and issue their first token.
    ///
    /// The email is lowercased before every subsequent step, so uniqueness
    /// is case-insensitive. The issued token is set on the returned record
    /// only and not written back to storage, matching the original behavior.
    pub async fn register(&self, payload: RegisterRequest) -> ServiceResult<UserProfile> {
        if payload.validate().is_err() {
            return Err(ServiceError::validation("All input is required"));
        }

        let email = payload.email.to_lowercase();

        let repo = UserRepository::new(self.pool);
        if repo.get_user_by_email(&email).await?.is_some() {
            return Err(ServiceError::conflict("User Already Exist. Please Login"));
        }

        let user_service = UserService::new(self.pool);
        let mut user = user_service
            .create_user(CreateNewUser {
                first_name: payload.first_name,
                last_name: payload.last_name,
                email,
                password: payload.password,
            })
            .await?;

        let token = self
            .jwt_utils
            .generate_token(&user.id, &user.email)
            .map_err(|e| ServiceError::internal(format!("Token generation failed: {}", e)))?;
        user.token = Some(token);

        Ok(UserProfile::from(user))
    }

    /// Authenticate a user and issue a fresh token.
    ///
    /// Lookup uses the email exactly as supplied; only registration
    /// normalizes case.
    pub async fn login(&self, payload: LoginRequest) -> ServiceResult<(UserProfile, String)> {
        if payload.validate().is_err() {
            return Err(ServiceError::validation("All input is required"));
        }

        let user_service = UserService::new(self.pool);
        let mut user = user_service
            .authenticate_user(&payload.email, &payload.password)
            .await?;

        let token = self
            .jwt_utils
            .generate_token(&user.id, &user.email)
            .map_err(|e| ServiceError::internal(format!("Token generation failed: {}", e)))?;
        user.token = Some(token.clone());

        Ok((UserProfile::from(user), token))
    }
}
