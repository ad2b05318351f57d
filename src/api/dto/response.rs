//! Common response envelope shared by every JSON endpoint.

use serde::Serialize;

/// Status discriminator carried by every envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "Error")]
    Error,
}

/// Envelope with a status and, for failures, a category message.
///
/// Operation-specific responses flatten this struct next to their own fields.
///
/// ```json
/// { "status": "OK" }
/// { "status": "Error", "error": "not found" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Envelope {
    pub status: Status,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Envelope {
    pub fn ok() -> Self {
        Self {
            status: Status::Ok,
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            error: Some(message.into()),
        }
    }
}
