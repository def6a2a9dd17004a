mod common;

use serde_json::Value;

#[tokio::test]
async fn test_health_ok() {
    let pool = common::test_pool().await;
    let server = common::test_server(common::create_test_state(pool, false));

    let response = server.get("/health").await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["database"]["status"], "ok");
}

#[tokio::test]
async fn test_health_degraded_when_store_is_closed() {
    let pool = common::test_pool().await;
    let server = common::test_server(common::create_test_state(pool.clone(), false));

    pool.close().await;

    let response = server.get("/health").await;

    response.assert_status_service_unavailable();

    let body: Value = response.json();
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["checks"]["database"]["status"], "error");
}
