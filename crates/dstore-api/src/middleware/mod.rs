//! # Middleware
//!
//! - `tracing_layer` — per-request tracing spans via `tower_http`.

pub mod tracing_layer;
