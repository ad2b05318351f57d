//! DTOs for the delete endpoint.

use serde::Serialize;

use super::response::Envelope;

pub const DELETED_MESSAGE: &str = "url deleted succesfully";

/// Successful delete: the envelope, a message and the deleted alias.
///
/// ```json
/// { "status": "OK", "msg": "url deleted succesfully", "alias": "x1" }
/// ```
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub msg: String,
    pub alias: String,
}

impl DeleteResponse {
    pub fn ok(alias: impl Into<String>) -> Self {
        Self {
            envelope: Envelope::ok(),
            msg: DELETED_MESSAGE.to_string(),
            alias: alias.into(),
        }
    }
}
