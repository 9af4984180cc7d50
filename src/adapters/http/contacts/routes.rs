//! HTTP routes for contact endpoints.

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::application::services::ContactService;

use super::handlers::{
    create_contact, delete_contact, get_all_contacts, get_contact, update_contact,
};

/// Creates the contact router with all endpoints.
pub fn contact_routes(service: Arc<ContactService>) -> Router {
    Router::new()
        .route("/", get(get_all_contacts).post(create_contact))
        .route(
            "/:uuid",
            get(get_contact).put(update_contact).delete(delete_contact),
        )
        .with_state(service)
}
