use serde_json::json;

use crate::helpers::{spawn_app, CatalogAnswer};

#[tokio::test]
async fn home_and_search_pages_are_served_as_html() {
    let app = spawn_app(CatalogAnswer::json(200, json!({ "docs": [] }))).await;

    for path in ["/", "/search"] {
        let response = app.get(path).await;

        assert_eq!(200, response.status().as_u16(), "{}", path);
        let content_type = response.headers().get("Content-Type").unwrap();
        assert!(content_type.to_str().unwrap().starts_with("text/html"));
        assert!(response.text().await.unwrap().contains("<nav>"));
    }
}

#[tokio::test]
async fn pages_do_not_call_the_catalog_themselves() {
    let app = spawn_app(CatalogAnswer::json(200, json!({ "docs": [] }))).await;

    app.get("/search").await;

    assert!(app.catalog.received_requests().is_empty());
}

#[tokio::test]
async fn unknown_path_returns_a_404() {
    let app = spawn_app(CatalogAnswer::json(200, json!({ "docs": [] }))).await;

    let response = app.get("/api/authors").await;

    assert_eq!(404, response.status().as_u16());
}
