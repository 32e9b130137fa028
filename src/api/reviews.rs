use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use maud::Markup;
use serde::Deserialize;

use super::internal_error;
use crate::domain::{NewReview, ReviewListing};
use crate::infrastructure::AppState;
use crate::views;

#[derive(Deserialize)]
pub struct UsernameForm {
    username: String,
}

#[derive(Deserialize)]
pub struct ReviewTitleForm {
    title: String,
}

pub async fn create(
    State(state): State<AppState>,
    Form(review): Form<NewReview>,
) -> Result<Redirect, StatusCode> {
    state
        .review_repo
        .create(review)
        .await
        .map_err(internal_error)?;

    Ok(Redirect::to("/review_all"))
}

pub async fn invalid() -> Markup {
    views::review::invalid()
}

/// Unknown usernames are sent to the invalid page; known ones get the review form.
pub async fn borrowed(
    State(state): State<AppState>,
    Form(form): Form<UsernameForm>,
) -> Result<Response, StatusCode> {
    let known = state
        .client_repo
        .exists(&form.username)
        .await
        .map_err(internal_error)?;

    if !known {
        tracing::info!("Unknown client {:?} tried to add a review", form.username);
        return Ok(Redirect::to("/invalid.html").into_response());
    }

    let borrowed = state
        .client_repo
        .borrowed_copies(&form.username)
        .await
        .map_err(internal_error)?;

    Ok(views::review::add_form(&borrowed).into_response())
}

pub async fn login_form() -> Markup {
    views::review::login_form()
}

pub async fn list_all(State(state): State<AppState>) -> Result<Markup, StatusCode> {
    let reviews = state
        .review_repo
        .find_all()
        .await
        .map_err(internal_error)?;

    Ok(views::review::render(&reviews))
}

pub async fn by_title(
    State(state): State<AppState>,
    Form(form): Form<ReviewTitleForm>,
) -> Result<Markup, StatusCode> {
    let reviews = state
        .review_repo
        .search_by_title(&form.title)
        .await
        .map_err(internal_error)?;

    Ok(views::review::render(&reviews))
}

pub async fn landing() -> Markup {
    views::review::render(&ReviewListing::default())
}
