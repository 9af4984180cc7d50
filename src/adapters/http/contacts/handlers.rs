//! HTTP handlers for contact endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use uuid::Uuid;

use crate::adapters::http::error::{service_error_response, ErrorResponse};
use crate::adapters::http::{default_page, default_page_size};
use crate::application::services::ContactService;
use crate::domain::{ContactDraft, ContactPatch};

use super::dto::{ContactResponse, ContactsQuery, CreateContactRequest, UpdateContactRequest};

/// GET /contacts - page of contacts with optional filters
pub async fn get_all_contacts(
    State(service): State<Arc<ContactService>>,
    Query(query): Query<ContactsQuery>,
) -> Response {
    let page = default_page(query.page);
    let page_size = default_page_size(query.page_size);

    match service
        .get_all_contacts(
            query.name.as_deref().unwrap_or(""),
            query.mobile.as_deref().unwrap_or(""),
            query.email.as_deref().unwrap_or(""),
            page,
            page_size,
        )
        .await
    {
        Ok(contacts) => {
            let body: Vec<ContactResponse> = contacts.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => service_error_response("Contact", e),
    }
}

/// GET /contacts/:uuid - single contact
pub async fn get_contact(
    State(service): State<Arc<ContactService>>,
    Path(uuid): Path<String>,
) -> Response {
    let Ok(uuid) = uuid.parse::<Uuid>() else {
        return invalid_uuid();
    };

    match service.get_contact_by_uuid(uuid).await {
        Ok(contact) => (StatusCode::OK, Json(ContactResponse::from(contact))).into_response(),
        Err(e) => service_error_response("Contact", e),
    }
}

/// POST /contacts - create a contact
pub async fn create_contact(
    State(service): State<Arc<ContactService>>,
    Json(req): Json<CreateContactRequest>,
) -> Response {
    let draft = ContactDraft {
        uuid: req.uuid,
        first_name: req.first_name,
        last_name: req.last_name,
        mobile: req.mobile,
        email: req.email,
        country_code: req.country_code,
        list_id: req.list_id,
    };

    let uuid = match service.create_contact(draft).await {
        Ok(uuid) => uuid,
        Err(e) => return service_error_response("Contact", e),
    };

    match service.get_contact_by_uuid(uuid).await {
        Ok(contact) => (StatusCode::CREATED, Json(ContactResponse::from(contact))).into_response(),
        Err(e) => service_error_response("Contact", e),
    }
}

/// PUT /contacts/:uuid - partial update
pub async fn update_contact(
    State(service): State<Arc<ContactService>>,
    Path(uuid): Path<String>,
    Json(req): Json<UpdateContactRequest>,
) -> Response {
    let Ok(uuid) = uuid.parse::<Uuid>() else {
        return invalid_uuid();
    };

    let patch = ContactPatch {
        uuid,
        first_name: req.first_name,
        last_name: req.last_name,
        mobile: req.mobile,
        email: req.email,
        country_code: req.country_code,
        list_id: req.list_id,
    };

    if let Err(e) = service.update_contact(patch).await {
        return service_error_response("Contact", e);
    }

    match service.get_contact_by_uuid(uuid).await {
        Ok(contact) => (StatusCode::OK, Json(ContactResponse::from(contact))).into_response(),
        Err(e) => service_error_response("Contact", e),
    }
}

/// DELETE /contacts/:uuid - delete a contact
pub async fn delete_contact(
    State(service): State<Arc<ContactService>>,
    Path(uuid): Path<String>,
) -> Response {
    let Ok(uuid) = uuid.parse::<Uuid>() else {
        return invalid_uuid();
    };

    match service.delete_contact(uuid).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => service_error_response("Contact", e),
    }
}

fn invalid_uuid() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request("Invalid UUID format")),
    )
        .into_response()
}
