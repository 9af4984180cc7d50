//! HTTP adapter: router assembly, shared state, error mapping, middleware.

pub mod contacts;
pub mod error;
pub mod lists;
pub mod middleware;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::application::services::{ContactService, ListService};

use middleware::{auth_middleware, AuthState};

/// Shared application state handed to the routers.
#[derive(Clone)]
pub struct AppState {
    pub list_service: Arc<ListService>,
    pub contact_service: Arc<ContactService>,
}

/// Assembles the API router: every route sits behind the bearer-token
/// middleware, with request tracing outermost.
pub fn api_router(state: AppState, api_token: String) -> Router {
    let auth: AuthState = Arc::new(api_token);

    Router::new()
        .nest("/lists", lists::list_routes(state.list_service))
        .nest("/contacts", contacts::contact_routes(state.contact_service))
        .layer(axum::middleware::from_fn_with_state(auth, auth_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Defaults page to 1 when absent or non-positive.
pub(crate) fn default_page(page: Option<i64>) -> i64 {
    match page {
        Some(p) if p > 0 => p,
        _ => 1,
    }
}

/// Defaults page size to 10 when absent or non-positive.
pub(crate) fn default_page_size(page_size: Option<i64>) -> i64 {
    match page_size {
        Some(s) if s > 0 => s,
        _ => 10,
    }
}
