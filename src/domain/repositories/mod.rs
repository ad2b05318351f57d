//! Storage capability traits for the domain layer.
//!
//! Handlers depend on these narrow traits instead of the concrete engine.
//! Implementations live in `crate::infrastructure::persistence`; mock
//! implementations are generated via `mockall` for unit tests.
//!
//! # Capabilities
//!
//! - [`UrlSaver`] - create a mapping
//! - [`UrlGetter`] - resolve an alias
//! - [`UrlDeleter`] - delete a mapping
//! - [`StoragePinger`] - health probe
//!
//! # Testing
//!
//! See `tests/repository_url.rs` for the PostgreSQL implementation and
//! `tests/handler_*.rs` for handler tests against mocks.

pub mod url_repository;

pub use url_repository::{StoragePinger, UrlDeleter, UrlGetter, UrlSaver};

#[cfg(test)]
pub use url_repository::{MockStoragePinger, MockUrlDeleter, MockUrlGetter, MockUrlSaver};
