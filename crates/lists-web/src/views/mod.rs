//! Request handlers.

mod home;
mod lists;

pub use home::{home_page, new_list};
pub use lists::{add_item, append_slash, view_list};

use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;

use crate::templates;

/// Body of both item forms. A missing field is treated like an empty one.
#[derive(Debug, Deserialize)]
pub struct NewItemForm {
    #[serde(default)]
    pub item_text: String,
}

/// `302 Found` to `location`.
pub(crate) fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

pub(crate) fn bad_request(html: String) -> Response {
    (StatusCode::BAD_REQUEST, Html(html)).into_response()
}

/// Fallback for unrouted paths.
pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Html(templates::not_found_page())).into_response()
}
