//! HTTP API layer.
//!
//! This layer translates HTTP requests into storage calls and storage
//! results into JSON envelopes and log events.
//!
//! # Modules
//!
//! - [`context`] - Explicit per-request logging context
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Authentication, request-id and tracing middleware
//! - [`routes`] - Route configuration

pub mod context;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
