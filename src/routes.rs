//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET    /{alias}`      - Alias redirect (public)
//! - `GET    /health`       - Health check (public)
//! - `POST   /url`          - Create alias (basic auth when configured)
//! - `DELETE /url/{alias}`  - Delete alias (basic auth when configured)
//!
//! # Middleware
//!
//! - **Request id** - `x-request-id` assigned when missing and echoed back
//! - **Tracing** - Structured request/response logging
//! - **Authentication** - HTTP Basic on `/url` routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::auth::{self, BasicCredentials};
use crate::api::middleware::{request_id, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::{Layer, ServiceBuilder};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state; handlers extract single capabilities from it
/// - `credentials` - when `Some`, `/url` routes require these basic credentials
pub fn app_router(state: AppState, credentials: Option<BasicCredentials>) -> NormalizePath<Router> {
    let url_router = match credentials {
        Some(credentials) => api::routes::url_routes()
            .route_layer(middleware::from_fn_with_state(credentials, auth::layer)),
        None => api::routes::url_routes(),
    };

    let router = Router::new()
        .route("/health", get(health_handler))
        .route("/{alias}", get(redirect_handler))
        .merge(url_router)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(request_id::set_layer())
                .layer(tracing::layer())
                .layer(request_id::propagate_layer()),
        );

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
