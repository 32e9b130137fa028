use std::collections::HashMap;

use axum::{
    Form,
    extract::{Query, State},
    http::StatusCode,
    response::Redirect,
};
use maud::Markup;
use serde::Deserialize;

use super::internal_error;
use crate::infrastructure::AppState;
use crate::views;

#[derive(Deserialize)]
pub struct AddNameForm {
    name: String,
}

pub async fn index(
    State(state): State<AppState>,
    Query(args): Query<HashMap<String, String>>,
) -> Result<Markup, StatusCode> {
    tracing::debug!("index query args: {:?}", args);

    let names = state.demo_repo.list_names().await.map_err(internal_error)?;
    Ok(views::index::render(&names))
}

pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<AddNameForm>,
) -> Result<Redirect, StatusCode> {
    state
        .demo_repo
        .add_name(&form.name)
        .await
        .map_err(internal_error)?;

    tracing::info!("Added demo name {:?}", form.name);
    Ok(Redirect::to("/"))
}
