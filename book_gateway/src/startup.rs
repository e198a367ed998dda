use actix_web::{
    dev::Server,
    web::{self, Data},
    App, HttpServer,
};
use common::helper::error_chain_fmt;
use std::{net::TcpListener, sync::Arc};
use tracing::info;
use tracing_actix_web::TracingLogger;

use crate::{
    configuration::{Settings, UpstreamSettings},
    ports::book_catalog_port::BookCatalogPort,
    repositories::book_the_one_api_repository::BookTheOneApiRepository,
    routes::{get_books, health_check, home_page, search_page},
};

/// Holds the newly built server, and some useful properties
pub struct Application {
    server: Server,
    port: u16,
}

#[derive(thiserror::Error)]
pub enum ApplicationBuildError {
    #[error(transparent)]
    IOError(#[from] std::io::Error),
    #[error("Failed to build the book catalog HTTP client: {0}")]
    HttpClientError(#[from] reqwest::Error),
}

impl std::fmt::Debug for ApplicationBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl Application {
    /// # Parameters
    /// - nb_workers: number of actix-web workers
    ///   if `None`, the number of available physical CPUs is used as the worker count.
    #[tracing::instrument(name = "Building application")]
    pub async fn build(
        settings: Settings,
        nb_workers: Option<usize>,
    ) -> Result<Self, ApplicationBuildError> {
        let address = format!(
            "{}:{}",
            settings.application.host, settings.application.port
        );
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();

        let book_repository = get_book_repository(&settings.upstream)?;
        info!(
            url = book_repository.books_url(),
            "Book catalog repository ready"
        );

        let server = run(listener, settings, nb_workers, Arc::new(book_repository))?;

        Ok(Self { server, port })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// This function only returns when the application is stopped
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        info!("Running server ...");
        self.server.await
    }
}

/// listener: the consumer binds their own port
///
/// TracingLogger middleware: generates a unique `request_id` for each incoming request
/// and attaches it to every span of the request.
///
/// # Parameters
/// - nb_workers: number of actix-web workers
///   if `None`, the number of available physical CPUs is used as the worker count.
/// - book_catalog: where the books are fetched from, shared by all workers
pub fn run(
    listener: TcpListener,
    settings: Settings,
    nb_workers: Option<usize>,
    book_catalog: Arc<dyn BookCatalogPort>,
) -> Result<Server, std::io::Error> {
    // `actix_web::Data` is an `Arc`: both are shared among all workers
    let book_catalog: Data<dyn BookCatalogPort> = Data::from(book_catalog);
    let upstream_settings = Data::new(settings.upstream);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/", web::get().to(home_page))
            .route("/search", web::get().to(search_page))
            .route("/health_check", web::get().to(health_check))
            .route("/api/books", web::get().to(get_books))
            .app_data(book_catalog.clone())
            .app_data(upstream_settings.clone())
    })
    .listen(listener)?;

    if let Some(nb_workers) = nb_workers {
        return Ok(server.workers(nb_workers).run());
    }

    // No await
    Ok(server.run())
}

/// Builds the repository targeting the third-party book catalog
///
/// The configured timeout covers the whole request: connection, headers and body.
pub fn get_book_repository(
    settings: &UpstreamSettings,
) -> Result<BookTheOneApiRepository, reqwest::Error> {
    let client = reqwest::Client::builder()
        .timeout(settings.timeout())
        .build()?;

    Ok(BookTheOneApiRepository::new(client, settings.books_url()))
}
