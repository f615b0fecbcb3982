//! Middleware for protecting authenticated routes.
//!
//! Tokens travel in the `Authorization` header, either as `Bearer <token>`
//! or as the bare token string. On success the decoded claims are attached
//! to the request extensions for downstream handlers; on failure the
//! request is answered with a 401 envelope and never reaches the handler.

use crate::api::common::{ApiResponse, service_error_to_http};
use crate::errors::ServiceError;
use crate::utils::jwt::JwtUtils;
use axum::{
    extract::{Extension, Request},
    http::{StatusCode, header::AUTHORIZATION},
    middleware::Next,
    response::{Json, Response},
};
use std::sync::Arc;

/// JWT authentication middleware
pub async fn jwt_auth(
    Extension(jwt_utils): Extension<Arc<JwtUtils>>,
    mut request: Request,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiResponse<()>>)> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok());

    let Some(auth_header) = auth_header else {
        return Err(service_error_to_http(ServiceError::unauthenticated(
            "A token is required for authentication",
        )));
    };

    let token = auth_header.strip_prefix("Bearer ").unwrap_or(auth_header);

    match jwt_utils.validate_token(token) {
        Ok(claims) => {
            // Make the decoded claims available to handlers
            request.extensions_mut().insert(claims);
            Ok(next.run(request).await)
        }
        Err(error) => {
            tracing::debug!("Token rejected: {}", error);
            Err(service_error_to_http(ServiceError::unauthenticated(
                "Invalid Token",
            )))
        }
    }
}
