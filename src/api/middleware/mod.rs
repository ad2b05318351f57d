//! HTTP middleware for request processing and protection.
//!
//! Provides request-id propagation, basic authentication and observability
//! middleware.

pub mod auth;
pub mod request_id;
pub mod tracing;
