//! Handler for creating aliases.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use std::sync::Arc;
use tracing::{error, info};
use validator::Validate;

use super::{ALIAS_EXISTS, FAILED_TO_DECODE, INTERNAL_ERROR, INVALID_REQUEST};
use crate::api::context::RequestContext;
use crate::api::dto::save::{SaveRequest, SaveResponse, validation_message};
use crate::domain::error::StorageError;
use crate::domain::repositories::UrlSaver;
use crate::error::AppError;
use crate::utils::alias::{AliasGenerator, validate_alias};

const OP: &str = "handlers.url.save";

/// Stores a target URL under a requested or generated alias.
///
/// # Endpoint
///
/// `POST /url`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/a", "alias": "x1" }
/// ```
///
/// `alias` is optional; when absent or blank a random alias is generated.
///
/// # Response
///
/// ```json
/// { "status": "OK", "alias": "x1" }
/// ```
///
/// # Errors
///
/// - **400** if the body cannot be decoded, the URL is invalid, or the alias
///   is malformed
/// - **409** `"alias already exists"` if the alias is taken
/// - **500** `"internal error"` on storage failure
pub async fn save_handler(
    State(saver): State<Arc<dyn UrlSaver>>,
    State(generator): State<AliasGenerator>,
    ctx: RequestContext,
    payload: Result<Json<SaveRequest>, JsonRejection>,
) -> Result<Json<SaveResponse>, AppError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            info!(op = OP, request_id = %ctx.request_id, error = %rejection, "failed to decode request body");
            return Err(AppError::bad_request(FAILED_TO_DECODE));
        }
    };

    save(saver.as_ref(), &generator, &ctx, request).await
}

/// Validates `request`, resolves the alias and stores the mapping.
pub async fn save(
    saver: &dyn UrlSaver,
    generator: &AliasGenerator,
    ctx: &RequestContext,
    request: SaveRequest,
) -> Result<Json<SaveResponse>, AppError> {
    if let Err(errors) = request.validate() {
        let message = validation_message(&errors);
        info!(op = OP, request_id = %ctx.request_id, error = %message, "invalid request");
        return Err(AppError::bad_request(message));
    }

    let alias = match request.requested_alias() {
        Some(alias) => {
            if let Err(e) = validate_alias(alias) {
                info!(op = OP, request_id = %ctx.request_id, alias, error = %e, "invalid alias");
                return Err(AppError::bad_request(e.to_string()));
            }
            alias.to_string()
        }
        None => generator.generate(),
    };

    match saver.save_url(&request.url, &alias).await {
        Ok(id) => {
            info!(op = OP, request_id = %ctx.request_id, alias = %alias, id, "url added");
            Ok(Json(SaveResponse::ok(alias)))
        }
        Err(StorageError::AliasExists(_)) => {
            info!(op = OP, request_id = %ctx.request_id, alias = %alias, url = %request.url, "alias already exists");
            Err(AppError::conflict(ALIAS_EXISTS))
        }
        Err(StorageError::InvalidInput(reason)) => {
            info!(op = OP, request_id = %ctx.request_id, alias = %alias, error = reason, "invalid request");
            Err(AppError::bad_request(INVALID_REQUEST))
        }
        Err(e) => {
            error!(op = OP, request_id = %ctx.request_id, alias = %alias, error = %e, "failed to add url");
            Err(AppError::internal(INTERNAL_ERROR))
        }
    }
}
