#![allow(dead_code)]

use alias_shortener::api::middleware::auth::BasicCredentials;
use alias_shortener::domain::error::StorageError;
use alias_shortener::domain::repositories::{StoragePinger, UrlDeleter, UrlGetter, UrlSaver};
use alias_shortener::infrastructure::persistence::PgUrlRepository;
use alias_shortener::routes::app_router;
use alias_shortener::state::AppState;
use alias_shortener::utils::alias::AliasGenerator;
use async_trait::async_trait;
use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use mockall::mock;
use sqlx::PgPool;
use std::sync::Arc;

pub const TEST_USER: &str = "admin";
pub const TEST_PASSWORD: &str = "secret";

/// `Authorization` values for `admin:secret` and `admin:wrong`.
pub const VALID_AUTHORIZATION: &str = "Basic YWRtaW46c2VjcmV0";
pub const WRONG_AUTHORIZATION: &str = "Basic YWRtaW46d3Jvbmc=";

mock! {
    pub Saver {}

    #[async_trait]
    impl UrlSaver for Saver {
        async fn save_url(&self, target: &str, alias: &str) -> Result<i64, StorageError>;
    }
}

mock! {
    pub Getter {}

    #[async_trait]
    impl UrlGetter for Getter {
        async fn get_url(&self, alias: &str) -> Result<String, StorageError>;
    }
}

mock! {
    pub Deleter {}

    #[async_trait]
    impl UrlDeleter for Deleter {
        async fn delete_url(&self, alias: &str) -> Result<(), StorageError>;
    }
}

mock! {
    pub Pinger {}

    #[async_trait]
    impl StoragePinger for Pinger {
        async fn ping(&self) -> Result<(), StorageError>;
    }
}

/// Mocked capabilities; any capability a test does not configure panics on use.
#[derive(Default)]
pub struct MockStorage {
    pub saver: MockSaver,
    pub getter: MockGetter,
    pub deleter: MockDeleter,
    pub pinger: MockPinger,
}

impl MockStorage {
    pub fn into_state(self) -> AppState {
        AppState {
            saver: Arc::new(self.saver),
            getter: Arc::new(self.getter),
            deleter: Arc::new(self.deleter),
            pinger: Arc::new(self.pinger),
            alias_generator: AliasGenerator::default(),
        }
    }
}

pub fn create_test_state(pool: PgPool) -> AppState {
    let storage = Arc::new(PgUrlRepository::new(Arc::new(pool)));
    AppState::from_storage(storage, AliasGenerator::default())
}

pub fn test_credentials() -> BasicCredentials {
    BasicCredentials::new(TEST_USER, TEST_PASSWORD)
}

/// Full application router (middleware and path normalization included).
pub fn test_server(state: AppState, credentials: Option<BasicCredentials>) -> TestServer {
    let app = app_router(state, credentials);
    TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap()
}

pub fn mock_server(storage: MockStorage) -> TestServer {
    test_server(storage.into_state(), None)
}

pub async fn create_test_url(pool: &PgPool, alias: &str, target: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("INSERT INTO url (target, alias) VALUES ($1, $2) RETURNING id")
        .bind(target)
        .bind(alias)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_urls(pool: &PgPool, alias: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM url WHERE alias = $1")
        .bind(alias)
        .fetch_one(pool)
        .await
        .unwrap()
}
