use crate::server::flash;
use axum::{
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::PrivateCookieJar;
use thiserror::Error as ThisError;
use tracing::error;

/// Flash text shown when a list id cannot be resolved.
pub const LIST_NOT_FOUND: &str = "The specified list was not found.";

#[derive(Debug, ThisError)]
pub enum TallyError {
    /// The requested list id has no row. Never surfaced as a 404: the
    /// response is a redirect to the list index with an error flash.
    #[error("list not found")]
    ListNotFound,

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

impl IntoResponse for TallyError {
    fn into_response(self) -> Response {
        match self {
            TallyError::ListNotFound => {
                let jar = PrivateCookieJar::from_headers(&HeaderMap::new(), flash::cookie_key());
                let jar = flash::add_error(jar, LIST_NOT_FOUND);
                (jar, Redirect::to("/lists")).into_response()
            }
            TallyError::DatabaseError(err) => {
                error!("database failure: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html("<h1>Something went wrong.</h1>".to_string()),
                )
                    .into_response()
            }
        }
    }
}
