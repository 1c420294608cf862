mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use link_redirector::infrastructure::notifier::NullNotifier;
use link_redirector::routes::app_router;
use serde_json::json;
use std::sync::Arc;

async fn make_server() -> (TestServer, sqlx::SqlitePool) {
    let pool = common::test_pool().await;
    let state = common::create_test_state(pool.clone(), Arc::new(NullNotifier::new()));
    (TestServer::new(app_router(state)).unwrap(), pool)
}

// ─── LIST ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_links_empty() {
    let (server, _pool) = make_server().await;

    let response = server.get("/api/links").await;

    response.assert_status_ok();
    response.assert_json(&json!([]));
}

#[tokio::test]
async fn test_list_links_newest_first() {
    let (server, pool) = make_server().await;
    let first = common::create_test_link(&pool, "crates", "https://crates.io").await;
    let second = common::create_test_link(&pool, "docs", "https://docs.rs").await;

    let response = server.get("/api/links").await;

    response.assert_status_ok();
    response.assert_json(&json!([
        { "id": second, "name": "docs", "link": "https://docs.rs" },
        { "id": first, "name": "crates", "link": "https://crates.io" },
    ]));
}

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_link_success() {
    let (server, pool) = make_server().await;

    let response = server
        .post("/api/links")
        .json(&json!({ "name": "docs", "link": "https://docs.rs" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["name"], "docs");
    assert_eq!(body["link"], "https://docs.rs");
    assert!(body["id"].as_i64().unwrap() > 0);
    assert_eq!(common::count_links(&pool).await, 1);
}

#[tokio::test]
async fn test_create_link_missing_name() {
    let (server, pool) = make_server().await;

    let response = server
        .post("/api/links")
        .json(&json!({ "link": "https://docs.rs" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(common::count_links(&pool).await, 0);
}

#[tokio::test]
async fn test_create_link_empty_link() {
    let (server, _pool) = make_server().await;

    let response = server
        .post("/api/links")
        .json(&json!({ "name": "docs", "link": "" }))
        .await;

    response.assert_status_bad_request();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["code"], "validation_error");
}

#[tokio::test]
async fn test_create_link_name_too_long() {
    let (server, _pool) = make_server().await;

    let response = server
        .post("/api/links")
        .json(&json!({ "name": "x".repeat(101), "link": "https://docs.rs" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_create_link_duplicate_name() {
    let (server, pool) = make_server().await;
    common::create_test_link(&pool, "docs", "https://docs.rs").await;

    let response = server
        .post("/api/links")
        .json(&json!({ "name": "docs", "link": "https://other.example" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"], "Name already exists!");
    assert_eq!(common::count_links(&pool).await, 1);
}

#[tokio::test]
async fn test_create_link_wrong_field_type() {
    let (server, pool) = make_server().await;

    let response = server
        .post("/api/links")
        .json(&json!({ "name": 5, "link": "https://docs.rs" }))
        .await;

    response.assert_status_bad_request();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"], "Invalid name or link");
    assert_eq!(body["code"], "validation_error");
    assert_eq!(common::count_links(&pool).await, 0);
}

#[tokio::test]
async fn test_create_link_non_json_body() {
    let (server, _pool) = make_server().await;

    let response = server.post("/api/links").text("name=docs").await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<serde_json::Value>()["code"], "validation_error");
}
