//! Data Transfer Objects for API requests and responses.
//!
//! All JSON responses share the [`response::Envelope`] status discriminator.
//! Request DTOs use Serde for deserialization and validator for input
//! validation.

pub mod delete;
pub mod health;
pub mod response;
pub mod save;
