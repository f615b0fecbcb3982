//! Handler for the protected welcome endpoint.
//!
//! Exists to demonstrate the auth guard: the handler only runs when the
//! middleware has verified a token and attached its claims.

use crate::api::common::ApiResponse;
use crate::utils::jwt::Claims;
use axum::{extract::Extension, http::StatusCode, response::Json as ResponseJson};

#[axum::debug_handler]
pub async fn welcome(
    Extension(claims): Extension<Claims>,
) -> (StatusCode, ResponseJson<ApiResponse<()>>) {
    tracing::debug!(user_id = %claims.user_id(), "authenticated welcome request");

    (
        StatusCode::OK,
        ResponseJson(ApiResponse::success_empty("Welcome 🙌")),
    )
}
