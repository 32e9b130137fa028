pub mod auth;
pub mod books;
pub mod index;
pub mod library;
pub mod reviews;

use axum::{
    Router,
    http::StatusCode,
    routing::{get, post},
};

use crate::domain::DomainError;
use crate::infrastructure::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        // Demo table
        .route("/", get(index::index))
        .route("/add", post(index::add))
        // Books
        .route("/book_title_query", post(books::by_title))
        .route("/book_author_query", post(books::by_author))
        .route("/book_library_query", post(books::by_library))
        .route("/book.html", get(books::landing))
        // Reviews
        .route("/review_add_add", post(reviews::create))
        .route("/invalid.html", get(reviews::invalid))
        .route("/review_add", post(reviews::borrowed))
        .route("/review_login", get(reviews::login_form))
        .route("/review_all", get(reviews::list_all))
        .route("/review_query", post(reviews::by_title))
        .route("/review.html", get(reviews::landing))
        // Libraries
        .route("/library_all", post(library::list_all))
        .route("/library_query", post(library::by_name))
        .route("/library.html", get(library::landing))
        // Auth
        .route("/login", get(auth::login))
        .with_state(state)
}

/// Log a repository failure and turn it into a bare 500.
pub(crate) fn internal_error(e: DomainError) -> StatusCode {
    match &e {
        DomainError::Connection(_) => tracing::error!("Database unavailable: {}", e),
        DomainError::Database(_) => tracing::error!("Query failed: {}", e),
    }
    StatusCode::INTERNAL_SERVER_ERROR
}
