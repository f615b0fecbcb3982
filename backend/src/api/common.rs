//! Response envelope and error handling utilities for API responses.
//!
//! Every endpoint answers with the same JSON envelope:
//!
//! ```json
//! {"status": "success" | "failure" | "failed", "message": "...", "data": ..., "token": "..."}
//! ```
//!
//! `data` is always present (null when there is nothing to return); `token`
//! appears only on a successful login. `service_error_to_http` is the single
//! place where service-layer errors become HTTP responses, so every code
//! path produces exactly one enveloped reply and internal detail never
//! reaches the message field.

use crate::errors::ServiceError;
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};

/// Status string carried in every envelope.
///
/// `Failed` exists only for the invalid-credentials response; the original
/// API spells that one response "failed" where everything else says
/// "failure", and the inconsistency is preserved deliberately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Failure,
    Failed,
}

/// Standard API response wrapper for all endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: ResponseStatus,
    /// Human-readable message; empty on most successes
    pub message: String,
    /// Response payload, serialized as null when absent
    pub data: Option<T>,
    /// Present only on successful login
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: message.into(),
            data: Some(data),
            token: None,
        }
    }

    /// Create a successful response carrying a top-level token
    pub fn success_with_token(data: T, token: String, message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: message.into(),
            data: Some(data),
            token: Some(token),
        }
    }

    /// Create a successful response with no payload
    pub fn success_empty(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: message.into(),
            data: None,
            token: None,
        }
    }
}

impl ApiResponse<()> {
    /// Create an error response
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Failure,
            message: message.into(),
            data: None,
            token: None,
        }
    }

    /// Create an invalid-credentials response ("failed" spelling)
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Failed,
            message: message.into(),
            data: None,
            token: None,
        }
    }
}

/// Converts ServiceError to the appropriate HTTP response in envelope form.
pub fn service_error_to_http(error: ServiceError) -> (StatusCode, Json<ApiResponse<()>>) {
    let (status, body) = match error {
        ServiceError::Validation { message } => {
            (StatusCode::BAD_REQUEST, ApiResponse::failure(message))
        }
        ServiceError::Conflict { message } => (StatusCode::CONFLICT, ApiResponse::failure(message)),
        ServiceError::InvalidCredentials => (
            StatusCode::BAD_REQUEST,
            ApiResponse::failed("Invalid Credentials"),
        ),
        ServiceError::Unauthenticated { message } => {
            (StatusCode::UNAUTHORIZED, ApiResponse::failure(message))
        }
        ServiceError::Database { source } => {
            tracing::error!("Database error: {}", source);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiResponse::failure("Internal server error"),
            )
        }
        ServiceError::Internal { message } => {
            tracing::error!("Internal error: {}", message);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiResponse::failure("Internal server error"),
            )
        }
    };

    (status, Json(body))
}
