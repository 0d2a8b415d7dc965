//! # lists-web
//!
//! Server-rendered HTML front end for superlists.
//!
//! | Method | Path                     | Handler               |
//! |--------|--------------------------|-----------------------|
//! | GET    | `/`                      | [`views::home_page`]  |
//! | POST   | `/lists/new`             | [`views::new_list`]   |
//! | GET    | `/lists/{id}/`           | [`views::view_list`]  |
//! | GET    | `/lists/{id}`            | [`views::append_slash`] |
//! | POST   | `/lists/{id}/add_item`   | [`views::add_item`]   |

pub mod error;
mod request_tracing;
pub mod templates;
pub mod views;

use std::sync::Arc;

use axum::Router;
use axum::middleware::from_fn;
use axum::routing::{get, post};
use lists_db::service::ListService;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    service: Arc<ListService>,
}

impl AppState {
    #[must_use]
    pub fn new(service: ListService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    #[must_use]
    pub fn service(&self) -> &ListService {
        &self.service
    }
}

/// Build the application router with request tracing applied to every route.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(views::home_page))
        .route("/lists/new", post(views::new_list))
        .route("/lists/{list_id}/", get(views::view_list))
        .route("/lists/{list_id}", get(views::append_slash))
        .route("/lists/{list_id}/add_item", post(views::add_item))
        .fallback(views::not_found)
        .layer(from_fn(request_tracing::request_tracing_middleware))
        .with_state(state)
}
