use serde_json::json;

use crate::helpers::{spawn_app, CatalogAnswer};

#[tokio::test]
async fn health_check_works() {
    let app = spawn_app(CatalogAnswer::json(200, json!({ "docs": [] }))).await;

    let response = app.get("/health_check").await;

    assert!(response.status().is_success());
    assert_eq!(Some(0), response.content_length());
}

#[tokio::test]
async fn health_check_does_not_call_the_catalog() {
    let app = spawn_app(CatalogAnswer::json(500, json!({}))).await;

    let response = app.get("/health_check").await;

    assert!(response.status().is_success());
    assert!(app.catalog.received_requests().is_empty());
}
