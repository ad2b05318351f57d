//! API route configuration.
//!
//! The `/url` routes mutate storage and are wrapped by
//! [`crate::api::middleware::auth`] when basic credentials are configured.

use crate::api::handlers::{delete_handler, delete_without_alias_handler, save_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, post},
};

/// Alias management routes.
///
/// # Endpoints
///
/// - `POST   /url`          - Store a target under a requested or generated alias
/// - `DELETE /url/{alias}`  - Delete an alias
/// - `DELETE /url`          - Rejected as an empty alias
pub fn url_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/url",
            post(save_handler).delete(delete_without_alias_handler),
        )
        .route("/url/{alias}", delete(delete_handler))
}
