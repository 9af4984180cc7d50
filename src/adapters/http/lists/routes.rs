//! HTTP routes for list endpoints.

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::application::services::ListService;

use super::handlers::{create_list, delete_list, get_all_lists, get_list, update_list};

/// Creates the list router with all endpoints.
pub fn list_routes(service: Arc<ListService>) -> Router {
    Router::new()
        .route("/", get(get_all_lists).post(create_list))
        .route("/:uuid", get(get_list).put(update_list).delete(delete_list))
        .with_state(service)
}
