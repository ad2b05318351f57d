//! DTOs for the save endpoint.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use super::response::Envelope;

/// Request to store a target URL, optionally under a chosen alias.
///
/// ```json
/// { "url": "https://example.com/a", "alias": "x1" }
/// ```
#[derive(Debug, Deserialize, Validate)]
pub struct SaveRequest {
    /// Destination URL (must be an absolute URL).
    #[validate(url)]
    pub url: String,

    /// Desired alias; a random one is generated when absent or empty.
    #[serde(default)]
    pub alias: Option<String>,
}

impl SaveRequest {
    /// Returns the requested alias, treating blank values as absent.
    pub fn requested_alias(&self) -> Option<&str> {
        self.alias
            .as_deref()
            .map(str::trim)
            .filter(|alias| !alias.is_empty())
    }
}

/// Successful save: the envelope plus the final alias.
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub alias: String,
}

impl SaveResponse {
    pub fn ok(alias: String) -> Self {
        Self {
            envelope: Envelope::ok(),
            alias,
        }
    }
}

/// Renders validation errors as a short, client-safe sentence.
///
/// ```text
/// field url is not a valid URL
/// ```
pub fn validation_message(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| match &*err.code {
                "url" => format!("field {} is not a valid URL", field),
                "required" => format!("field {} is a required field", field),
                _ => format!("field {} is not valid", field),
            })
        })
        .collect();

    messages.sort();
    messages.join(", ")
}
