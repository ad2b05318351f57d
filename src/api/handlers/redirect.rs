//! Handler for alias redirects.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::{error, info};

use super::{INTERNAL_ERROR, INVALID_REQUEST, NOT_FOUND};
use crate::api::context::RequestContext;
use crate::domain::error::StorageError;
use crate::domain::repositories::UrlGetter;
use crate::error::AppError;
use crate::utils::alias::validate_alias;

const OP: &str = "handlers.url.redirect";

/// Redirects an alias to its stored target URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// # Responses
///
/// - **307 Temporary Redirect** with `Location: <target>`
/// - **400 Bad Request** if the alias is syntactically invalid (no lookup)
/// - **404 Not Found** `{"status":"Error","error":"not found"}`
/// - **500 Internal Server Error** `{"status":"Error","error":"internal error"}`
pub async fn redirect_handler(
    State(getter): State<Arc<dyn UrlGetter>>,
    ctx: RequestContext,
    Path(alias): Path<String>,
) -> Result<Response, AppError> {
    redirect(getter.as_ref(), &ctx, &alias).await
}

/// Resolves `alias` through `getter` and builds the redirect response.
pub async fn redirect(
    getter: &dyn UrlGetter,
    ctx: &RequestContext,
    alias: &str,
) -> Result<Response, AppError> {
    if let Err(e) = validate_alias(alias) {
        info!(op = OP, request_id = %ctx.request_id, alias, reason = %e, "invalid alias");
        return Err(AppError::bad_request(INVALID_REQUEST));
    }

    let target = match getter.get_url(alias).await {
        Ok(target) => target,
        Err(StorageError::NotFound) => {
            info!(op = OP, request_id = %ctx.request_id, alias, "url not found");
            return Err(AppError::not_found(NOT_FOUND));
        }
        Err(e) => {
            error!(op = OP, request_id = %ctx.request_id, alias, error = %e, "failed to get url");
            return Err(AppError::internal(INTERNAL_ERROR));
        }
    };

    let Ok(location) = HeaderValue::from_str(&target) else {
        error!(op = OP, request_id = %ctx.request_id, alias, target = %target, "stored url is not a valid location header");
        return Err(AppError::internal(INTERNAL_ERROR));
    };

    info!(op = OP, request_id = %ctx.request_id, alias, target = %target, "got url");

    Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]).into_response())
}
