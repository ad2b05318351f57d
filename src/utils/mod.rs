//! Utility functions shared by handlers and the admin CLI.
//!
//! - [`alias`] - Alias validation and random alias generation

pub mod alias;
