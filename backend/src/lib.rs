//! User registration and authentication API.
//!
//! Register with email/password, log in to receive a bearer token, and
//! access a protected endpoint guarded by token verification. Router
//! assembly lives here so the binary and the integration tests share it.

pub mod api;
pub mod auth;
pub mod config;
pub mod database;
pub mod errors;
pub mod repositories;
pub mod services;
pub mod utils;

use crate::api::common::ApiResponse;
use crate::utils::jwt::JwtUtils;
use axum::{Extension, Router, http::StatusCode, response::Json};
use sqlx::SqlitePool;
use std::sync::Arc;

/// Assembles the application router with its injected dependencies.
///
/// The pool and the JWT utilities are the only process-wide state; both are
/// layered in as extensions so handlers and the auth guard receive them
/// explicitly.
pub fn app(pool: SqlitePool, jwt_utils: Arc<JwtUtils>) -> Router {
    Router::new()
        .merge(auth::routes::auth_router())
        .merge(api::welcome::routes::welcome_router())
        .fallback(not_found)
        .layer(Extension(pool))
        .layer(Extension(jwt_utils))
}

async fn not_found() -> (StatusCode, Json<ApiResponse<()>>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::failure("Page not found")),
    )
}
