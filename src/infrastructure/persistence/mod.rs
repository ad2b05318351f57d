//! PostgreSQL storage engine.
//!
//! Concrete implementation of the domain capability traits using SQLx.
//! The schema lives in `./migrations` and is embedded via [`pg_url_repository::MIGRATOR`].
//!
//! # Repositories
//!
//! - [`PgUrlRepository`] - URL mapping storage (save, get, delete, ping)

pub mod pg_url_repository;

pub use pg_url_repository::{MIGRATOR, PgUrlRepository, PoolSettings};
