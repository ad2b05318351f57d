//! HTTP request handlers.
//!
//! Each handler extracts only the storage capability it needs from the
//! router state, plus an explicit [`crate::api::context::RequestContext`]
//! used for logging.

pub mod delete;
pub mod health;
pub mod redirect;
pub mod save;

pub use delete::{delete_handler, delete_without_alias_handler};
pub use health::health_handler;
pub use redirect::redirect_handler;
pub use save::save_handler;

/// Client-facing category messages. Error details only go to the log.
pub const INVALID_REQUEST: &str = "invalid request";
pub const NOT_FOUND: &str = "not found";
pub const INTERNAL_ERROR: &str = "internal error";
pub const ALIAS_EXISTS: &str = "alias already exists";
pub const FAILED_TO_DECODE: &str = "failed to decode request";
