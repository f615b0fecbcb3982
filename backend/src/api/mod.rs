//! HTTP API surface: shared response types and per-endpoint modules.

pub mod common;
pub mod welcome;
