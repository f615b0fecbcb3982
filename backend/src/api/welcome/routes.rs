//! Route wiring for the protected welcome endpoint.

use crate::api::welcome::handlers::welcome;
use crate::auth::middleware::jwt_auth;
use axum::{Router, middleware, routing::get};

/// Creates the welcome router, guarded by the JWT middleware
pub fn welcome_router() -> Router {
    Router::new().route("/welcome", get(welcome).layer(middleware::from_fn(jwt_auth)))
}
