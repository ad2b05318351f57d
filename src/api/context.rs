//! Per-request logging context.
//!
//! Handlers receive a [`RequestContext`] as an explicit argument and pass its
//! fields to every log call instead of relying on an ambient logger.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use std::convert::Infallible;

use crate::api::middleware::request_id::REQUEST_ID_HEADER;

/// Placeholder when no request id header is present.
const UNKNOWN_REQUEST_ID: &str = "-";

/// Fields identifying the current request in log lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub request_id: String,
}

impl RequestContext {
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
        }
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new(UNKNOWN_REQUEST_ID)
    }
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let context = parts
            .headers
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(RequestContext::new)
            .unwrap_or_default();

        Ok(context)
    }
}
