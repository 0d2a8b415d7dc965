use axum::Form;
use axum::extract::{Path, State};
use axum::response::{Html, Redirect, Response};
use lists_core::entities::list_url;
use lists_core::ids::is_list_id;
use lists_db::error::DatabaseError;

use super::{NewItemForm, bad_request, found};
use crate::AppState;
use crate::error::WebError;
use crate::templates;

fn known_shape(list_id: &str) -> Result<(), WebError> {
    if is_list_id(list_id) {
        Ok(())
    } else {
        Err(WebError::ListNotFound(list_id.to_string()))
    }
}

async fn render_list(
    state: &AppState,
    list_id: &str,
    error: Option<&str>,
) -> Result<String, WebError> {
    let list = state.service().get_list(list_id).await?;
    let items = state.service().items_for_list(&list.id).await?;
    Ok(templates::list_page(&list, &items, error))
}

pub async fn view_list(
    State(state): State<AppState>,
    Path(list_id): Path<String>,
) -> Result<Html<String>, WebError> {
    known_shape(&list_id)?;
    Ok(Html(render_list(&state, &list_id, None).await?))
}

/// `/lists/<id>` without the trailing slash.
pub async fn append_slash(Path(list_id): Path<String>) -> Result<Redirect, WebError> {
    known_shape(&list_id)?;
    Ok(Redirect::permanent(&list_url(&list_id)))
}

pub async fn add_item(
    State(state): State<AppState>,
    Path(list_id): Path<String>,
    Form(form): Form<NewItemForm>,
) -> Result<Response, WebError> {
    known_shape(&list_id)?;
    match state.service().create_item(&list_id, &form.item_text).await {
        Ok(_) => Ok(found(&list_url(&list_id))),
        Err(DatabaseError::Validation(message)) => {
            let html = render_list(&state, &list_id, Some(&message)).await?;
            Ok(bad_request(html))
        }
        Err(error) => Err(error.into()),
    }
}
