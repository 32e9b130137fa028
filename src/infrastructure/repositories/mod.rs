//! Repository implementations using SeaORM raw statements
//!
//! SQL text is fixed; user input is only ever bound as a statement value or
//! matched in Rust after the rows are fetched.

pub mod catalog_repository;
pub mod client_repository;
pub mod demo_repository;
pub mod library_repository;
pub mod review_repository;

pub use catalog_repository::SeaOrmCatalogRepository;
pub use client_repository::SeaOrmClientRepository;
pub use demo_repository::SeaOrmDemoRepository;
pub use library_repository::SeaOrmLibraryRepository;
pub use review_repository::SeaOrmReviewRepository;

/// Case-insensitive substring match over full Unicode.
///
/// SQLite's `LOWER` and `LIKE` only fold ASCII, so searches are matched here
/// instead of in SQL.
pub(crate) fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
