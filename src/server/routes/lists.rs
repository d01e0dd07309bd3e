use super::{is_ajax, load_list};
use crate::db::TodoStore;
use crate::error::TallyError;
use crate::server::flash;
use crate::server::router::AppState;
use crate::validate;
use crate::views::pages;

use axum::{
    Form, Router,
    extract::{Path, State},
    http::HeaderMap,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use axum_extra::extract::cookie::PrivateCookieJar;
use serde::Deserialize;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index_redirect))
        .route("/lists", get(lists_index).post(create_list))
        .route("/lists/new", get(new_list_form))
        .route("/lists/{id}", get(show_list).post(update_list))
        .route("/lists/{id}/edit", get(edit_list_form))
        .route("/lists/{id}/destroy", post(destroy_list))
}

#[derive(Debug, Deserialize)]
struct ListNameForm {
    list_name: String,
}

async fn index_redirect() -> Redirect {
    Redirect::to("/lists")
}

/// GET /lists
async fn lists_index(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
) -> Result<Response, TallyError> {
    let mut store = TodoStore::acquire(&state.pool).await?;
    let lists = store.all_lists().await?;

    let (jar, messages) = flash::take_flash(jar);
    Ok((jar, pages::lists_index(&lists, &messages)).into_response())
}

/// GET /lists/new
async fn new_list_form(jar: PrivateCookieJar) -> Response {
    let (jar, messages) = flash::take_flash(jar);
    (jar, pages::new_list("", &messages)).into_response()
}

/// POST /lists
async fn create_list(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
    Form(form): Form<ListNameForm>,
) -> Result<Response, TallyError> {
    let name = form.list_name.trim();
    let mut store = TodoStore::acquire(&state.pool).await?;

    let lists = store.all_lists().await?;
    if let Some(error) = validate::error_for_list_name(name, &lists) {
        let (jar, mut messages) = flash::take_flash(jar);
        messages.error = Some(error.to_string());
        return Ok((jar, pages::new_list(name, &messages)).into_response());
    }

    store.create_list(name).await?;
    let jar = flash::add_success(jar, "The list has been created.");
    Ok((jar, Redirect::to("/lists")).into_response())
}

/// GET /lists/{id}
async fn show_list(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    jar: PrivateCookieJar,
) -> Result<Response, TallyError> {
    let mut store = TodoStore::acquire(&state.pool).await?;
    let list = load_list(&mut store, id).await?;

    let (jar, messages) = flash::take_flash(jar);
    Ok((jar, pages::list_detail(&list, "", &messages)).into_response())
}

/// GET /lists/{id}/edit
async fn edit_list_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    jar: PrivateCookieJar,
) -> Result<Response, TallyError> {
    let mut store = TodoStore::acquire(&state.pool).await?;
    let list = load_list(&mut store, id).await?;

    let (jar, messages) = flash::take_flash(jar);
    let page = pages::edit_list(&list, &list.name, &messages);
    Ok((jar, page).into_response())
}

/// POST /lists/{id}
async fn update_list(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    jar: PrivateCookieJar,
    Form(form): Form<ListNameForm>,
) -> Result<Response, TallyError> {
    let name = form.list_name.trim();
    let mut store = TodoStore::acquire(&state.pool).await?;
    let list = load_list(&mut store, id).await?;

    let lists = store.all_lists().await?;
    if let Some(error) = validate::error_for_list_name(name, &lists) {
        let (jar, mut messages) = flash::take_flash(jar);
        messages.error = Some(error.to_string());
        return Ok((jar, pages::edit_list(&list, name, &messages)).into_response());
    }

    store.rename_list(id, name).await?;
    let jar = flash::add_success(jar, "The list has been updated.");
    Ok((jar, Redirect::to(&format!("/lists/{id}"))).into_response())
}

/// POST /lists/{id}/destroy
///
/// No existence check: deleting an already-gone list is a no-op that still
/// reports success, and AJAX callers get the index path to navigate to.
async fn destroy_list(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    jar: PrivateCookieJar,
) -> Result<Response, TallyError> {
    let mut store = TodoStore::acquire(&state.pool).await?;
    store.delete_list(id).await?;

    let jar = flash::add_success(jar, "The list has been deleted.");
    if is_ajax(&headers) {
        Ok((jar, "/lists").into_response())
    } else {
        Ok((jar, Redirect::to("/lists")).into_response())
    }
}
