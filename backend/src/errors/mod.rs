//! Global application error types.
//!
//! This module defines the error taxonomy shared by the service layer and
//! provides helper constructors for the common cases. Conversion to HTTP
//! responses happens in one place, `api::common::service_error_to_http`.

use thiserror::Error;

/// Generic service error used across the authentication flow.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// Bad email or bad password; callers must not learn which.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Unauthenticated: {message}")]
    Unauthenticated { message: String },

    #[error("Database error: {source}")]
    Database {
        #[from]
        source: anyhow::Error,
    },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::Unauthenticated {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
