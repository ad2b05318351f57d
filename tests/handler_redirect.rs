mod common;

use alias_shortener::domain::error::StorageError;
use axum::http::StatusCode;
use sqlx::PgPool;

#[sqlx::test]
async fn test_redirect_success(pool: PgPool) {
    common::create_test_url(&pool, "x1", "https://example.com/target").await;
    let server = common::test_server(common::create_test_state(pool), None);

    let response = server.get("/x1").await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[sqlx::test]
async fn test_redirect_not_found(pool: PgPool) {
    let server = common::test_server(common::create_test_state(pool), None);

    let response = server.get("/missing").await;

    response.assert_status_not_found();
    assert!(response.maybe_header("location").is_none());

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "Error");
    assert_eq!(json["error"], "not found");
}

#[sqlx::test]
async fn test_redirect_trailing_slash(pool: PgPool) {
    common::create_test_url(&pool, "slash", "https://example.com/slash").await;
    let server = common::test_server(common::create_test_state(pool), None);

    let response = server.get("/slash/").await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), "https://example.com/slash");
}

#[tokio::test]
async fn test_redirect_storage_failure() {
    let mut storage = common::MockStorage::default();
    storage.getter.expect_get_url().times(1).returning(|_| {
        Err(StorageError::failure(
            "storage.postgres.GetURL",
            "pq: relation \"url\" does not exist",
        ))
    });
    let server = common::mock_server(storage);

    let response = server.get("/x1").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "Error");
    assert_eq!(json["error"], "internal error");
    assert!(!response.text().contains("relation"));
}

#[tokio::test]
async fn test_redirect_invalid_alias_skips_storage() {
    let mut storage = common::MockStorage::default();
    storage.getter.expect_get_url().times(0);
    let server = common::mock_server(storage);

    let response = server.get("/bad%20alias").await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "Error");
}

#[tokio::test]
async fn test_redirect_is_public_with_auth_enabled() {
    let mut storage = common::MockStorage::default();
    storage
        .getter
        .expect_get_url()
        .times(1)
        .returning(|_| Ok("https://example.com/a".to_string()));
    let server = common::test_server(storage.into_state(), Some(common::test_credentials()));

    let response = server.get("/x1").await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
}

#[tokio::test]
async fn test_request_id_is_generated_and_echoed() {
    let mut storage = common::MockStorage::default();
    storage
        .getter
        .expect_get_url()
        .returning(|_| Ok("https://example.com/a".to_string()));
    let server = common::mock_server(storage);

    let generated = server.get("/x1").await;
    assert!(generated.maybe_header("x-request-id").is_some());

    let echoed = server
        .get("/x1")
        .add_header("x-request-id", "req-42")
        .await;
    assert_eq!(echoed.header("x-request-id"), "req-42");
}
