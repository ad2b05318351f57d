//! Storage error taxonomy shared by every URL mapping operation.
//!
//! Backend-specific errors are classified into [`StorageError`] inside the
//! storage adapter. Nothing outside [`crate::infrastructure::persistence`]
//! inspects driver error types.

use thiserror::Error;

/// Boxed backend error kept for diagnostics only.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors returned by the storage engine.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No mapping matches the requested alias.
    #[error("url not found")]
    NotFound,

    /// The alias is already taken by another mapping.
    #[error("alias {0} already exists")]
    AliasExists(String),

    /// Input rejected before reaching the backend.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// Any other backend failure (connectivity, query, schema).
    #[error("{op}: {source}")]
    Failure {
        op: &'static str,
        #[source]
        source: BoxError,
    },
}

impl StorageError {
    /// Wraps a backend error with the name of the failing operation.
    pub fn failure(op: &'static str, source: impl Into<BoxError>) -> Self {
        Self::Failure {
            op,
            source: source.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    pub fn is_alias_exists(&self) -> bool {
        matches!(self, Self::AliasExists(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_failure_keeps_operation_and_source() {
        let err = StorageError::failure("storage.postgres.GetURL", "connection refused");

        assert_eq!(err.to_string(), "storage.postgres.GetURL: connection refused");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_alias_exists_message() {
        let err = StorageError::AliasExists("x1".to_string());

        assert_eq!(err.to_string(), "alias x1 already exists");
        assert!(err.is_alias_exists());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_not_found_predicate() {
        assert!(StorageError::NotFound.is_not_found());
        assert!(!StorageError::InvalidInput("alias is empty").is_not_found());
    }
}
