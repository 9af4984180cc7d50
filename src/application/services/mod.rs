//! Application services: validation and orchestration over the repositories.

mod contact_service;
mod list_service;

pub use contact_service::ContactService;
pub use list_service::ListService;

use crate::domain::{RepoError, ValidationErrors};

/// Errors returned by the service layer.
///
/// `Validation` is always a client-correctable condition and carries the
/// full field detail; `Conflict` is a storage-detected duplicate that
/// slipped past the advisory pre-checks; everything else is opaque
/// infrastructure failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The requested uuid does not exist.
    NotFound,
    /// One or more field-level input violations.
    Validation(ValidationErrors),
    /// A uniqueness constraint was violated at storage time.
    Conflict(String),
    /// Any other storage failure.
    Infrastructure(String),
}

impl ServiceError {
    pub fn validation(errors: ValidationErrors) -> Self {
        ServiceError::Validation(errors)
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        ServiceError::Infrastructure(message.into())
    }
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceError::NotFound => write!(f, "record not found"),
            ServiceError::Validation(errors) => write!(f, "{}", errors),
            ServiceError::Conflict(msg) => write!(f, "conflict: {}", msg),
            ServiceError::Infrastructure(msg) => write!(f, "error: {}", msg),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<RepoError> for ServiceError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => ServiceError::NotFound,
            RepoError::Conflict(msg) => ServiceError::Conflict(msg),
            RepoError::Database(msg) => ServiceError::Infrastructure(msg),
        }
    }
}
