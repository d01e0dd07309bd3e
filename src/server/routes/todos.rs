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
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
    routing::post,
};
use axum_extra::extract::cookie::PrivateCookieJar;
use serde::Deserialize;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/lists/{list_id}/todos", post(create_todo))
        .route("/lists/{list_id}/todos/{id}", post(update_todo_status))
        .route("/lists/{list_id}/todos/{id}/destroy", post(destroy_todo))
        .route("/lists/{list_id}/check_all", post(check_all))
}

#[derive(Debug, Deserialize)]
struct TodoNameForm {
    todo: String,
}

#[derive(Debug, Deserialize)]
struct StatusForm {
    completed: bool,
}

/// POST /lists/{list_id}/todos
async fn create_todo(
    State(state): State<AppState>,
    Path(list_id): Path<i64>,
    jar: PrivateCookieJar,
    Form(form): Form<TodoNameForm>,
) -> Result<Response, TallyError> {
    let name = form.todo.trim();
    let mut store = TodoStore::acquire(&state.pool).await?;
    let list = load_list(&mut store, list_id).await?;

    if let Some(error) = validate::error_for_todo_name(name, &list.todos) {
        let (jar, mut messages) = flash::take_flash(jar);
        messages.error = Some(error.to_string());
        return Ok((jar, pages::list_detail(&list, name, &messages)).into_response());
    }

    store.create_todo(list_id, name).await?;
    let jar = flash::add_success(jar, "The todo has been added.");
    Ok((jar, Redirect::to(&format!("/lists/{list_id}"))).into_response())
}

/// POST /lists/{list_id}/todos/{id}/destroy
async fn destroy_todo(
    State(state): State<AppState>,
    Path((list_id, id)): Path<(i64, i64)>,
    headers: HeaderMap,
    jar: PrivateCookieJar,
) -> Result<Response, TallyError> {
    let mut store = TodoStore::acquire(&state.pool).await?;
    load_list(&mut store, list_id).await?;

    store.delete_todo(list_id, id).await?;

    if is_ajax(&headers) {
        Ok(StatusCode::NO_CONTENT.into_response())
    } else {
        let jar = flash::add_success(jar, "The todo has been deleted.");
        Ok((jar, Redirect::to(&format!("/lists/{list_id}"))).into_response())
    }
}

/// POST /lists/{list_id}/todos/{id}
async fn update_todo_status(
    State(state): State<AppState>,
    Path((list_id, id)): Path<(i64, i64)>,
    jar: PrivateCookieJar,
    Form(form): Form<StatusForm>,
) -> Result<Response, TallyError> {
    let mut store = TodoStore::acquire(&state.pool).await?;
    load_list(&mut store, list_id).await?;

    store.set_todo_status(list_id, id, form.completed).await?;

    let jar = flash::add_success(jar, "The todo has been updated.");
    Ok((jar, Redirect::to(&format!("/lists/{list_id}"))).into_response())
}

/// POST /lists/{list_id}/check_all
async fn check_all(
    State(state): State<AppState>,
    Path(list_id): Path<i64>,
    jar: PrivateCookieJar,
) -> Result<Response, TallyError> {
    let mut store = TodoStore::acquire(&state.pool).await?;
    load_list(&mut store, list_id).await?;

    store.mark_all_complete(list_id).await?;

    let jar = flash::add_success(jar, "All todos have been updated.");
    Ok((jar, Redirect::to(&format!("/lists/{list_id}"))).into_response())
}
