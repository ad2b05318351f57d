//! Core domain entities.
//!
//! The service has a single entity type, [`UrlMapping`].

pub mod url_mapping;

pub use url_mapping::UrlMapping;
