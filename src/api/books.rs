use axum::{Form, extract::State, http::StatusCode};
use maud::Markup;
use serde::Deserialize;

use super::internal_error;
use crate::domain::BookListing;
use crate::infrastructure::AppState;
use crate::views;

#[derive(Deserialize)]
pub struct TitleForm {
    title: String,
}

#[derive(Deserialize)]
pub struct AuthorForm {
    author_name: String,
}

#[derive(Deserialize)]
pub struct LibraryForm {
    library_name: String,
}

pub async fn by_title(
    State(state): State<AppState>,
    Form(form): Form<TitleForm>,
) -> Result<Markup, StatusCode> {
    let books = state
        .catalog_repo
        .search_by_title(&form.title)
        .await
        .map_err(internal_error)?;

    Ok(views::book::render(&books))
}

pub async fn by_author(
    State(state): State<AppState>,
    Form(form): Form<AuthorForm>,
) -> Result<Markup, StatusCode> {
    let books = state
        .catalog_repo
        .search_by_author(&form.author_name)
        .await
        .map_err(internal_error)?;

    Ok(views::book::render(&books))
}

pub async fn by_library(
    State(state): State<AppState>,
    Form(form): Form<LibraryForm>,
) -> Result<Markup, StatusCode> {
    let books = state
        .catalog_repo
        .search_by_library(&form.library_name)
        .await
        .map_err(internal_error)?;

    Ok(views::book::render(&books))
}

/// Search page with no results
pub async fn landing() -> Markup {
    views::book::render(&BookListing::default())
}
