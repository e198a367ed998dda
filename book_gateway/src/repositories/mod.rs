pub mod book_the_one_api_repository;
