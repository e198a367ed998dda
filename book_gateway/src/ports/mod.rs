pub mod book_catalog_port;
