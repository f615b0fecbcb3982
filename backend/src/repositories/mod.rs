//! Database repositories providing persistence for domain entities.

pub mod user_repository;
