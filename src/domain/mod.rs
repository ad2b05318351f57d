//! Domain layer: the URL mapping entity, the storage error taxonomy, and the
//! capability traits handlers depend on.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - One-method storage capability traits
//! - [`error`] - [`error::StorageError`], returned by every storage operation
//!
//! The domain layer has no dependency on the HTTP or database crates.

pub mod entities;
pub mod error;
pub mod repositories;
