//! HTTP handlers for list endpoints.

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
use crate::application::services::ListService;
use crate::domain::{ListDraft, ListPatch};

use super::dto::{CreateListRequest, ListResponse, ListsQuery, UpdateListRequest};

/// GET /lists - page of lists, optionally filtered by name
pub async fn get_all_lists(
    State(service): State<Arc<ListService>>,
    Query(query): Query<ListsQuery>,
) -> Response {
    let page = default_page(query.page);
    let page_size = default_page_size(query.page_size);

    match service
        .get_all_lists(query.name.as_deref().unwrap_or(""), page, page_size)
        .await
    {
        Ok(lists) => {
            let body: Vec<ListResponse> = lists.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => service_error_response("List", e),
    }
}

/// GET /lists/:uuid - single list
pub async fn get_list(
    State(service): State<Arc<ListService>>,
    Path(uuid): Path<String>,
) -> Response {
    let Ok(uuid) = uuid.parse::<Uuid>() else {
        return invalid_uuid();
    };

    match service.get_list_by_uuid(uuid).await {
        Ok(list) => (StatusCode::OK, Json(ListResponse::from(list))).into_response(),
        Err(e) => service_error_response("List", e),
    }
}

/// POST /lists - create a list
pub async fn create_list(
    State(service): State<Arc<ListService>>,
    Json(req): Json<CreateListRequest>,
) -> Response {
    let draft = ListDraft {
        uuid: req.uuid,
        name: req.name,
    };

    let uuid = match service.create_list(draft).await {
        Ok(uuid) => uuid,
        Err(e) => return service_error_response("List", e),
    };

    // Read back the stored row so the response reflects what persisted.
    match service.get_list_by_uuid(uuid).await {
        Ok(list) => (StatusCode::CREATED, Json(ListResponse::from(list))).into_response(),
        Err(e) => service_error_response("List", e),
    }
}

/// PUT /lists/:uuid - partial update
pub async fn update_list(
    State(service): State<Arc<ListService>>,
    Path(uuid): Path<String>,
    Json(req): Json<UpdateListRequest>,
) -> Response {
    let Ok(uuid) = uuid.parse::<Uuid>() else {
        return invalid_uuid();
    };

    let patch = ListPatch {
        uuid,
        name: req.name,
    };

    if let Err(e) = service.update_list(patch).await {
        return service_error_response("List", e);
    }

    match service.get_list_by_uuid(uuid).await {
        Ok(list) => (StatusCode::OK, Json(ListResponse::from(list))).into_response(),
        Err(e) => service_error_response("List", e),
    }
}

/// DELETE /lists/:uuid - delete a list and its contacts
pub async fn delete_list(
    State(service): State<Arc<ListService>>,
    Path(uuid): Path<String>,
) -> Response {
    let Ok(uuid) = uuid.parse::<Uuid>() else {
        return invalid_uuid();
    };

    match service.delete_list(uuid).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => service_error_response("List", e),
    }
}

fn invalid_uuid() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request("Invalid UUID format")),
    )
        .into_response()
}
