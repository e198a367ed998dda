use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use common::helper::error_chain_fmt;
use serde_json::json;
use tracing::{info, warn};

use crate::configuration::UpstreamSettings;
use crate::ports::book_catalog_port::{BookCatalogPort, BookCatalogPortError};

/// Lists the names of the books of the catalog
///
/// Each call hits the catalog once: nothing is cached between requests.
/// Answers `200` with `[{"name": ...}, ...]` in the catalog order,
/// or `500` with `{"error": ...}`.
#[tracing::instrument(name = "Get books handler", skip(book_catalog, upstream_settings))]
pub async fn get_books(
    book_catalog: web::Data<dyn BookCatalogPort>,
    upstream_settings: web::Data<UpstreamSettings>,
) -> Result<HttpResponse, GetBooksError> {
    let envelope = book_catalog
        .fetch_envelope()
        .await
        .map_err(|error| GetBooksError::from_port_error(error, &upstream_settings))?;

    let books = envelope.project();
    info!(nb_books = books.len(), "Projected book names");

    Ok(HttpResponse::Ok().json(books))
}

#[derive(thiserror::Error)]
pub enum GetBooksError {
    /// The upstream status and body are never sent back
    #[error("Failed to fetch books")]
    UpstreamRejected(#[source] BookCatalogPortError),
    #[error("{0}")]
    TransportOrParseFailure(String),
    /// A transport or parsing failure whose description is kept for the logs only
    #[error("Failed to fetch books")]
    UndisclosedFailure(String),
}

impl GetBooksError {
    fn from_port_error(error: BookCatalogPortError, upstream_settings: &UpstreamSettings) -> Self {
        match error {
            BookCatalogPortError::UpstreamRejected(_) => GetBooksError::UpstreamRejected(error),
            BookCatalogPortError::TransportOrParseFailure(message) => {
                if upstream_settings.forward_error_messages {
                    // Unlike rejections, this description reaches the caller as is
                    warn!(
                        error = %message,
                        "Forwarding a book catalog failure description to the caller"
                    );
                    GetBooksError::TransportOrParseFailure(message)
                } else {
                    GetBooksError::UndisclosedFailure(message)
                }
            }
        }
    }
}

impl std::fmt::Debug for GetBooksError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for GetBooksError {
    fn status_code(&self) -> StatusCode {
        match self {
            GetBooksError::UpstreamRejected(_)
            | GetBooksError::TransportOrParseFailure(_)
            | GetBooksError::UndisclosedFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    #[tracing::instrument(name = "Response error from get_books handler", skip(self), fields(error = ?self))]
    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(json!({ "error": self.to_string() }))
    }
}
