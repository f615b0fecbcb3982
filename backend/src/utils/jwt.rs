//! JWT token utilities for authentication.
//!
//! Provides token creation, validation, and claims management. Tokens are
//! signed with HS256 using a process-wide secret injected at construction
//! time; nothing here reads the environment.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::Config;

/// JWT claims: the user's identity plus the validity window.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// User email
    pub email: String,
    /// Token issued at timestamp
    pub iat: i64,
    /// Token expiration timestamp
    pub exp: i64,
}

impl Claims {
    pub fn user_id(&self) -> &str {
        &self.sub
    }

    /// Check if token has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// Failure modes of token verification, kept distinct so callers can log
/// them apart even though clients only ever see a generic rejection.
#[derive(Debug, Error)]
pub enum JwtError {
    #[error("token signature does not match")]
    InvalidSignature,
    #[error("token has expired")]
    Expired,
    #[error("token is malformed")]
    Malformed,
    #[error("token encoding failed: {0}")]
    EncodingFailed(String),
}

/// JWT token utility for creating and validating tokens.
pub struct JwtUtils {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expires_in_seconds: i64,
}

impl JwtUtils {
    /// Create a new JwtUtils instance with an explicit secret and token
    /// lifetime in seconds.
    pub fn new(secret: &str, expires_in_seconds: i64) -> Self {
        let encoding_key = EncodingKey::from_secret(secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // No leeway: expiry is evaluated exactly at verification time.
        validation.leeway = 0;

        JwtUtils {
            encoding_key,
            decoding_key,
            validation,
            expires_in_seconds,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.jwt_secret, config.token_expires_in_seconds)
    }

    /// Generate a new signed token embedding the user's id and email.
    pub fn generate_token(&self, user_id: &str, email: &str) -> Result<String, JwtError> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.expires_in_seconds);

        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Validate and decode a token.
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::Expired,
                ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                _ => JwtError::Malformed,
            })
    }
}
