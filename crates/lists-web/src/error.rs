//! Mapping of handler failures onto HTML error pages.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use lists_db::error::DatabaseError;
use thiserror::Error;

use crate::templates;

#[derive(Debug, Error)]
pub enum WebError {
    /// The addressed list does not exist (or the id is malformed).
    #[error("list not found: {0}")]
    ListNotFound(String),

    #[error(transparent)]
    Database(DatabaseError),
}

impl From<DatabaseError> for WebError {
    fn from(error: DatabaseError) -> Self {
        match error {
            DatabaseError::NotFound { id, .. } => Self::ListNotFound(id),
            other => Self::Database(other),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self {
            Self::ListNotFound(id) => {
                tracing::debug!(list_id = %id, "unknown list requested");
                (StatusCode::NOT_FOUND, Html(templates::not_found_page())).into_response()
            }
            Self::Database(error) => {
                tracing::error!(%error, "database operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(templates::server_error_page()),
                )
                    .into_response()
            }
        }
    }
}
