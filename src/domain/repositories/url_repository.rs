//! Capability traits for URL mapping storage.
//!
//! Each trait exposes exactly one storage operation so that a handler
//! depends only on what it calls. [`crate::infrastructure::persistence::PgUrlRepository`]
//! implements all of them.

use crate::domain::error::StorageError;
use async_trait::async_trait;

/// Creates new mappings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlSaver: Send + Sync {
    /// Stores `target` under `alias` and returns the surrogate id.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::AliasExists`] if the alias is already taken.
    /// Returns [`StorageError::InvalidInput`] if `alias` or `target` is empty.
    /// Returns [`StorageError::Failure`] on any other backend error.
    async fn save_url(&self, target: &str, alias: &str) -> Result<i64, StorageError>;
}

/// Resolves aliases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlGetter: Send + Sync {
    /// Returns the target stored under `alias` (exact match).
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if no mapping exists.
    /// Returns [`StorageError::Failure`] on backend errors.
    async fn get_url(&self, alias: &str) -> Result<String, StorageError>;
}

/// Removes mappings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlDeleter: Send + Sync {
    /// Deletes the mapping stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if nothing was deleted.
    /// Returns [`StorageError::Failure`] on backend errors.
    async fn delete_url(&self, alias: &str) -> Result<(), StorageError>;
}

/// Liveness probe for the backing store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StoragePinger: Send + Sync {
    async fn ping(&self) -> Result<(), StorageError>;
}
