mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::Value;
use tinyurl::routes::router;

#[tokio::test]
async fn test_health_in_memory() {
    let server = TestServer::new(router(common::create_test_state())).unwrap();

    let response = server.get("/api/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["checks"]["storage"]["status"], "ok");
}

#[tokio::test]
async fn test_health_sqlite() {
    let server = TestServer::new(router(common::create_sqlite_state().await)).unwrap();

    let response = server.get("/api/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["checks"]["storage"]["status"], "ok");
}

#[tokio::test]
async fn test_health_storage_down() {
    let server = TestServer::new(router(common::create_failing_state())).unwrap();

    let response = server.get("/api/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = response.json();
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["checks"]["storage"]["status"], "error");
}
