use axum::{Form, extract::State, http::StatusCode};
use maud::Markup;
use serde::Deserialize;

use super::internal_error;
use crate::domain::LibraryListing;
use crate::infrastructure::AppState;
use crate::views;

#[derive(Deserialize)]
pub struct LibraryNameForm {
    name: String,
}

pub async fn list_all(State(state): State<AppState>) -> Result<Markup, StatusCode> {
    let libraries = state
        .library_repo
        .find_all()
        .await
        .map_err(internal_error)?;

    Ok(views::library::render(&libraries))
}

pub async fn by_name(
    State(state): State<AppState>,
    Form(form): Form<LibraryNameForm>,
) -> Result<Markup, StatusCode> {
    let libraries = state
        .library_repo
        .search_by_name(&form.name)
        .await
        .map_err(internal_error)?;

    Ok(views::library::render(&libraries))
}

pub async fn landing() -> Markup {
    views::library::render(&LibraryListing::default())
}
