use async_trait::async_trait;
use common::helper::error_chain_fmt;

use crate::domain::entities::book::UpstreamEnvelope;

/// Source of the book catalog
///
/// Injected in the HTTP handlers so the third-party API can be swapped with a fake in tests.
#[async_trait]
pub trait BookCatalogPort: Send + Sync {
    /// Fetches the first page of the catalog, without any retry
    async fn fetch_envelope(&self) -> Result<UpstreamEnvelope, BookCatalogPortError>;
}

#[derive(thiserror::Error)]
pub enum BookCatalogPortError {
    /// The catalog answered with a non-2xx status
    #[error("Book catalog rejected the request with status {0}")]
    UpstreamRejected(u16),
    /// The request could not be sent, or its response could not be read or decoded.
    /// Holds the description of the failure.
    #[error("{0}")]
    TransportOrParseFailure(String),
}

impl std::fmt::Debug for BookCatalogPortError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}
