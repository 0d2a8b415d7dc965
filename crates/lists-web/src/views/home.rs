use axum::Form;
use axum::extract::State;
use axum::response::{Html, Response};
use lists_db::error::DatabaseError;

use super::{NewItemForm, bad_request, found};
use crate::AppState;
use crate::error::WebError;
use crate::templates;

pub async fn home_page() -> Html<String> {
    Html(templates::home_page(None))
}

/// Start a new list with its first item and send the visitor to it.
pub async fn new_list(
    State(state): State<AppState>,
    Form(form): Form<NewItemForm>,
) -> Result<Response, WebError> {
    match state.service().create_list_with_item(&form.item_text).await {
        Ok((list, item)) => {
            tracing::info!(list_id = %list.id, item_id = %item.id, "new list started");
            Ok(found(&list.url()))
        }
        Err(DatabaseError::Validation(message)) => {
            Ok(bad_request(templates::home_page(Some(&message))))
        }
        Err(error) => Err(error.into()),
    }
}
