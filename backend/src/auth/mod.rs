//! Authentication: registration, login, and the token guard.
//!
//! Handlers parse and answer HTTP; `service` owns the registration and
//! login flows; `middleware` protects routes by verifying bearer tokens.

pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod service;
