pub mod lists;
pub mod todos;

use crate::db::TodoStore;
use crate::db::models::TodoList;
use crate::error::TallyError;
use axum::http::HeaderMap;

/// Resolve a list id, short-circuiting with the not-found redirect
/// (`TallyError::ListNotFound`) when no row exists.
pub(crate) async fn load_list(store: &mut TodoStore, id: i64) -> Result<TodoList, TallyError> {
    store.find_list(id).await?.ok_or(TallyError::ListNotFound)
}

/// The delete endpoints answer AJAX callers with bare status/path bodies.
pub(crate) fn is_ajax(headers: &HeaderMap) -> bool {
    headers
        .get("x-requested-with")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == "XMLHttpRequest")
}
