//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;
use tracing::error;

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::domain::repositories::StoragePinger;

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Database reachable
/// - **503 Service Unavailable**: Database ping failed
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok", "message": "Connected" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(pinger): State<Arc<dyn StoragePinger>>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let db_check = check_database(pinger.as_ref()).await;
    let healthy = db_check.is_ok();

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { database: db_check },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks database connectivity with a trivial query.
async fn check_database(pinger: &dyn StoragePinger) -> CheckStatus {
    match pinger.ping().await {
        Ok(()) => CheckStatus::ok("Connected"),
        Err(e) => {
            error!(error = %e, "health check: database ping failed");
            CheckStatus::error("Database unreachable")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::StorageError;
    use crate::domain::repositories::MockStoragePinger;

    #[tokio::test]
    async fn test_check_database_ok() {
        let mut pinger = MockStoragePinger::new();
        pinger.expect_ping().times(1).returning(|| Ok(()));

        let check = check_database(&pinger).await;

        assert!(check.is_ok());
    }

    #[tokio::test]
    async fn test_check_database_error_hides_cause() {
        let mut pinger = MockStoragePinger::new();
        pinger
            .expect_ping()
            .times(1)
            .returning(|| Err(StorageError::failure("storage.postgres.Ping", "password authentication failed")));

        let check = check_database(&pinger).await;

        assert!(!check.is_ok());
        assert_eq!(check.message.as_deref(), Some("Database unreachable"));
    }
}
