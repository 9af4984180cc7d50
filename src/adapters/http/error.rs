//! Shared HTTP error bodies and the service-error → status mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::application::services::ServiceError;
use crate::domain::ValidationErrors;

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    pub fn not_found(resource_type: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found", resource_type),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            code: "CONFLICT".to_string(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
        }
    }
}

/// 400 body carrying the full field detail of a validation failure.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationFailureResponse {
    pub code: String,
    pub message: String,
    pub errors: ValidationErrors,
}

impl ValidationFailureResponse {
    pub fn new(errors: ValidationErrors) -> Self {
        Self {
            code: "VALIDATION_FAILED".to_string(),
            message: errors.to_string(),
            errors,
        }
    }
}

/// Maps service errors onto HTTP responses: NotFound→404, validation→400
/// with the field list, storage conflict→409, everything else→500.
pub fn service_error_response(resource_type: &str, error: ServiceError) -> Response {
    match error {
        ServiceError::NotFound => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found(resource_type)),
        )
            .into_response(),
        ServiceError::Validation(errors) => (
            StatusCode::BAD_REQUEST,
            Json(ValidationFailureResponse::new(errors)),
        )
            .into_response(),
        ServiceError::Conflict(msg) => {
            (StatusCode::CONFLICT, Json(ErrorResponse::conflict(msg))).into_response()
        }
        ServiceError::Infrastructure(msg) => {
            tracing::error!(%msg, "service infrastructure error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal(msg)),
            )
                .into_response()
        }
    }
}
