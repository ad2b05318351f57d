//! PostgreSQL implementation of URL mapping storage.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::UrlMapping;
use crate::domain::error::StorageError;
use crate::domain::repositories::{StoragePinger, UrlDeleter, UrlGetter, UrlSaver};

/// Schema for the `url` table and its alias index.
///
/// Every statement uses `IF NOT EXISTS`, so running it against a provisioned
/// database is a no-op.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Name of the unique constraint generated for `url.alias`.
const ALIAS_UNIQUE_CONSTRAINT: &str = "url_alias_key";

const OP_NEW: &str = "storage.postgres.New";
const OP_SAVE: &str = "storage.postgres.SaveURL";
const OP_GET: &str = "storage.postgres.GetURL";
const OP_DELETE: &str = "storage.postgres.DeleteURL";
const OP_PING: &str = "storage.postgres.Ping";

/// Connection pool settings for [`PgUrlRepository::connect`].
#[derive(Debug, Clone)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub connect_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 10,
            connect_timeout: Duration::from_secs(30),
        }
    }
}

/// PostgreSQL storage engine for URL mappings.
///
/// Alias uniqueness is enforced by the database constraint, never by a
/// lookup before insert. All backend errors are classified into
/// [`StorageError`] here.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository over an already provisioned pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Connects to PostgreSQL, verifies the connection and provisions the schema.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Failure`] if the database is unreachable or
    /// the schema cannot be created.
    pub async fn connect(database_url: &str, settings: &PoolSettings) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(settings.max_connections)
            .acquire_timeout(settings.connect_timeout)
            .connect(database_url)
            .await
            .map_err(|e| StorageError::failure(OP_NEW, e))?;

        sqlx::query("SELECT 1")
            .execute(&pool)
            .await
            .map_err(|e| StorageError::failure(OP_NEW, e))?;

        let repository = Self::new(Arc::new(pool));
        repository.ensure_schema().await?;

        Ok(repository)
    }

    /// Creates the `url` table and `idx_alias` index when missing.
    pub async fn ensure_schema(&self) -> Result<(), StorageError> {
        MIGRATOR
            .run(self.pool.as_ref())
            .await
            .map_err(|e| StorageError::failure(OP_NEW, e))
    }

    /// Returns the full mapping, including its surrogate id.
    ///
    /// Used by the admin CLI; HTTP handlers only ever see the target.
    pub async fn find_mapping(&self, alias: &str) -> Result<UrlMapping, StorageError> {
        let row: Option<(i64, String, String)> =
            sqlx::query_as("SELECT id, alias, target FROM url WHERE alias = $1")
                .bind(alias)
                .fetch_optional(self.pool.as_ref())
                .await
                .map_err(|e| StorageError::failure(OP_GET, e))?;

        row.map(|(id, alias, target)| UrlMapping::new(id, alias, target))
            .ok_or(StorageError::NotFound)
    }

    /// Closes every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl UrlSaver for PgUrlRepository {
    async fn save_url(&self, target: &str, alias: &str) -> Result<i64, StorageError> {
        if alias.is_empty() {
            return Err(StorageError::InvalidInput("alias is empty"));
        }
        if target.is_empty() {
            return Err(StorageError::InvalidInput("target is empty"));
        }

        sqlx::query_scalar::<_, i64>("INSERT INTO url (target, alias) VALUES ($1, $2) RETURNING id")
            .bind(target)
            .bind(alias)
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(|e| {
                if is_alias_unique_violation(&e) {
                    StorageError::AliasExists(alias.to_string())
                } else {
                    StorageError::failure(OP_SAVE, e)
                }
            })
    }
}

#[async_trait]
impl UrlGetter for PgUrlRepository {
    async fn get_url(&self, alias: &str) -> Result<String, StorageError> {
        let target = sqlx::query_scalar::<_, String>("SELECT target FROM url WHERE alias = $1")
            .bind(alias)
            .fetch_optional(self.pool.as_ref())
            .await
            .map_err(|e| StorageError::failure(OP_GET, e))?;

        target.ok_or(StorageError::NotFound)
    }
}

#[async_trait]
impl UrlDeleter for PgUrlRepository {
    async fn delete_url(&self, alias: &str) -> Result<(), StorageError> {
        // A no-op DELETE is not an error for Postgres; only the row count tells.
        let result = sqlx::query("DELETE FROM url WHERE alias = $1")
            .bind(alias)
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| StorageError::failure(OP_DELETE, e))?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}

#[async_trait]
impl StoragePinger for PgUrlRepository {
    async fn ping(&self) -> Result<(), StorageError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .map(|_| ())
            .map_err(|e| StorageError::failure(OP_PING, e))
    }
}

/// Reports whether `e` is a unique violation (SQLSTATE 23505) on `url.alias`.
fn is_alias_unique_violation(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(ALIAS_UNIQUE_CONSTRAINT) | None)
}
