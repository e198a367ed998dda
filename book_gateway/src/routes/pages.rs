use actix_web::{http::header::ContentType, HttpResponse};
use once_cell::sync::Lazy;

const LAYOUT: &str = include_str!("pages/layout.html");

// Pages are static: rendered once, on first request
static HOME_PAGE: Lazy<String> = Lazy::new(|| render_page("Home", include_str!("pages/home.html")));
static SEARCH_PAGE: Lazy<String> =
    Lazy::new(|| render_page("Search", include_str!("pages/search.html")));

/// Wraps a page content in the navigation shell shared by all pages
fn render_page(title: &str, content: &str) -> String {
    LAYOUT
        .replace("{{title}}", title)
        .replace("{{content}}", content)
}

#[tracing::instrument(name = "Home page handler")]
pub async fn home_page() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(HOME_PAGE.as_str())
}

/// Search view: fetches `/api/books` once and filters the names client-side
#[tracing::instrument(name = "Search page handler")]
pub async fn search_page() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(SEARCH_PAGE.as_str())
}
