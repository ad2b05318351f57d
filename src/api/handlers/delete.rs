//! Handlers for alias deletion.

use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;
use tracing::{error, info};

use super::{INTERNAL_ERROR, INVALID_REQUEST, NOT_FOUND};
use crate::api::context::RequestContext;
use crate::api::dto::delete::DeleteResponse;
use crate::domain::error::StorageError;
use crate::domain::repositories::UrlDeleter;
use crate::error::AppError;

const OP: &str = "handlers.url.delete";

/// Deletes the mapping stored under an alias.
///
/// # Endpoint
///
/// `DELETE /url/{alias}`
///
/// # Response
///
/// ```json
/// { "status": "OK", "msg": "url deleted succesfully", "alias": "x1" }
/// ```
///
/// # Errors
///
/// - **400** `"invalid request"` if the alias is blank (no storage call)
/// - **404** `"not found"` if nothing was stored under the alias
/// - **500** `"internal error"` on storage failure
pub async fn delete_handler(
    State(deleter): State<Arc<dyn UrlDeleter>>,
    ctx: RequestContext,
    Path(alias): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    delete_alias(deleter.as_ref(), &ctx, &alias).await
}

/// `DELETE /url` without an alias segment.
///
/// Answers with the same validation failure as a blank alias.
pub async fn delete_without_alias_handler(
    State(deleter): State<Arc<dyn UrlDeleter>>,
    ctx: RequestContext,
) -> Result<Json<DeleteResponse>, AppError> {
    delete_alias(deleter.as_ref(), &ctx, "").await
}

/// Deletes `alias` through `deleter`, logging exactly one line per outcome.
pub async fn delete_alias(
    deleter: &dyn UrlDeleter,
    ctx: &RequestContext,
    alias: &str,
) -> Result<Json<DeleteResponse>, AppError> {
    if alias.trim().is_empty() {
        info!(op = OP, request_id = %ctx.request_id, "alias is empty");
        return Err(AppError::bad_request(INVALID_REQUEST));
    }

    match deleter.delete_url(alias).await {
        Ok(()) => {
            info!(op = OP, request_id = %ctx.request_id, alias, "url deleted succesfully");
            Ok(Json(DeleteResponse::ok(alias)))
        }
        Err(StorageError::NotFound) => {
            info!(op = OP, request_id = %ctx.request_id, alias, "url is not found");
            Err(AppError::not_found(NOT_FOUND))
        }
        Err(e) => {
            error!(op = OP, request_id = %ctx.request_id, alias, error = %e, "failed to delete url");
            Err(AppError::internal(INTERNAL_ERROR))
        }
    }
}
