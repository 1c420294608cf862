mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use link_redirector::api::handlers::health_handler;
use link_redirector::infrastructure::notifier::NullNotifier;
use std::sync::Arc;

#[tokio::test]
async fn test_health_endpoint_success() {
    let pool = common::test_pool().await;
    common::create_test_link(&pool, "docs", "https://docs.rs").await;
    let state = common::create_test_state(pool, Arc::new(NullNotifier::new()));
    let app = Router::new()
        .route("/api/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/api/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert_eq!(json["checks"]["database"]["message"], "Connected, 1 links");
    assert_eq!(json["checks"]["notifier"]["status"], "disabled");
}

#[tokio::test]
async fn test_health_reports_enabled_notifier() {
    let pool = common::test_pool().await;
    let state = common::create_test_state(pool, Arc::new(common::RecordingNotifier::default()));
    let app = Router::new()
        .route("/api/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let json = server.get("/api/health").await.json::<serde_json::Value>();

    assert_eq!(json["checks"]["notifier"]["status"], "ok");
    assert!(json.get("version").is_some());
}

#[tokio::test]
async fn test_health_degraded_when_database_closed() {
    let pool = common::test_pool().await;
    let state = common::create_test_state(pool.clone(), Arc::new(NullNotifier::new()));
    let app = Router::new()
        .route("/api/health", get(health_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    pool.close().await;

    let response = server.get("/api/health").await;

    response.assert_status(axum::http::StatusCode::SERVICE_UNAVAILABLE);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
}
