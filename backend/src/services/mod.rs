//! Business logic services sitting between the API layer and repositories.

pub mod user_service;
