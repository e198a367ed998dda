use async_trait::async_trait;
use reqwest::Client;
use tracing::{info, warn};

use crate::{
    domain::entities::book::UpstreamEnvelope,
    ports::book_catalog_port::{BookCatalogPort, BookCatalogPortError},
};

/// Book catalog served by the-one-api.dev
///
/// The `reqwest::Client` is cheap to clone and shares its connection pool,
/// so one client is built at startup and shared by every worker.
#[derive(Clone)]
pub struct BookTheOneApiRepository {
    client: Client,
    books_url: String,
}

impl BookTheOneApiRepository {
    /// # Parameters
    /// - `client`: HTTP client, with its timeout already configured
    /// - `books_url`: full URL of the catalog page, ex: `https://the-one-api.dev/v2/book?limit=100`
    pub fn new(client: Client, books_url: String) -> Self {
        Self { client, books_url }
    }

    pub fn books_url(&self) -> &str {
        &self.books_url
    }
}

#[async_trait]
impl BookCatalogPort for BookTheOneApiRepository {
    #[tracing::instrument(name = "Fetching the book catalog", skip(self), fields(url = %self.books_url))]
    async fn fetch_envelope(&self) -> Result<UpstreamEnvelope, BookCatalogPortError> {
        let response = self
            .client
            .get(&self.books_url)
            .send()
            .await
            .map_err(|error| BookCatalogPortError::TransportOrParseFailure(error.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Book catalog rejected the request");
            return Err(BookCatalogPortError::UpstreamRejected(status.as_u16()));
        }

        let envelope = response
            .json::<UpstreamEnvelope>()
            .await
            .map_err(|error| BookCatalogPortError::TransportOrParseFailure(error.to_string()))?;

        info!(
            nb_docs = envelope.docs.as_ref().map_or(0, Vec::len),
            "Fetched the book catalog"
        );
        Ok(envelope)
    }
}
