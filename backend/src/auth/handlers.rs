//! Handler functions for authentication-related API endpoints.
//!
//! These functions parse incoming HTTP requests for registration and login
//! and hand off to `auth::service` for the core logic. A body that cannot
//! be parsed at all gets the same 400 envelope as a body with missing
//! fields, so no request ever sees axum's default plain-text rejection.

use crate::api::common::{ApiResponse, service_error_to_http};
use crate::auth::models::{LoginRequest, RegisterRequest, UserProfile};
use crate::auth::service::AuthService;
use crate::errors::ServiceError;
use crate::utils::jwt::JwtUtils;
use axum::{
    extract::{Extension, Json, rejection::JsonRejection},
    http::StatusCode,
    response::Json as ResponseJson,
};
use sqlx::SqlitePool;
use std::sync::Arc;

type HandlerError = (StatusCode, ResponseJson<ApiResponse<()>>);

/// Handle user registration request
#[axum::debug_handler]
pub async fn register(
    Extension(pool): Extension<SqlitePool>,
    Extension(jwt_utils): Extension<Arc<JwtUtils>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, ResponseJson<ApiResponse<UserProfile>>), HandlerError> {
    let Json(payload) = payload
        .map_err(|_| service_error_to_http(ServiceError::validation("All input is required")))?;

    let auth_service = AuthService::new(&pool, jwt_utils);

    match auth_service.register(payload).await {
        Ok(user) => Ok((
            StatusCode::CREATED,
            ResponseJson(ApiResponse::success(user, "")),
        )),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Handle user login request
#[axum::debug_handler]
pub async fn login(
    Extension(pool): Extension<SqlitePool>,
    Extension(jwt_utils): Extension<Arc<JwtUtils>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<ResponseJson<ApiResponse<UserProfile>>, HandlerError> {
    let Json(payload) = payload
        .map_err(|_| service_error_to_http(ServiceError::validation("All input is required")))?;

    let auth_service = AuthService::new(&pool, jwt_utils);

    match auth_service.login(payload).await {
        Ok((user, token)) => Ok(ResponseJson(ApiResponse::success_with_token(
            user, token, "",
        ))),
        Err(error) => Err(service_error_to_http(error)),
    }
}
