//! List lifecycle service.

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{List, ListDraft, ListPatch, NewList, ValidationError, ValidationErrors};
use crate::ports::ListRepository;

use super::ServiceError;

/// Validates and orchestrates list operations over a [`ListRepository`].
pub struct ListService {
    repo: Arc<dyn ListRepository>,
}

impl ListService {
    pub fn new(repo: Arc<dyn ListRepository>) -> Self {
        Self { repo }
    }

    /// Fetch a page of lists, optionally filtered by name substring.
    ///
    /// Page and page size are caller-supplied and not clamped here; a
    /// non-positive page size reaches the repository as "no limit".
    pub async fn get_all_lists(
        &self,
        name: &str,
        page: i64,
        page_size: i64,
    ) -> Result<Vec<List>, ServiceError> {
        let offset = (page - 1) * page_size;
        Ok(self.repo.get_all(name, page_size, offset).await?)
    }

    pub async fn get_list_by_uuid(&self, uuid: Uuid) -> Result<List, ServiceError> {
        Ok(self.repo.get_by_uuid(uuid).await?)
    }

    /// Create a list, generating a fresh uuid when the caller supplied none.
    ///
    /// Returns the created list's external uuid.
    pub async fn create_list(&self, draft: ListDraft) -> Result<Uuid, ServiceError> {
        let mut errs = Vec::new();
        if draft.name.is_empty() {
            errs.push(ValidationError::new("Name", "name cannot be empty"));
        }
        if !errs.is_empty() {
            return Err(ServiceError::validation(ValidationErrors::new(errs)));
        }

        let uuid = draft.uuid.unwrap_or_else(Uuid::new_v4);
        self.repo
            .create(&NewList {
                uuid,
                name: draft.name,
            })
            .await?;
        Ok(uuid)
    }

    /// Update a list. Fails with `NotFound` when the uuid is unknown.
    /// A supplied name must be non-empty; `None` means "leave unchanged",
    /// so an empty string is a rejected value, not a skip.
    pub async fn update_list(&self, patch: ListPatch) -> Result<(), ServiceError> {
        self.repo.get_by_uuid(patch.uuid).await?;

        if patch.name.as_deref() == Some("") {
            return Err(ServiceError::validation(ValidationErrors::new(vec![
                ValidationError::new("Name", "name cannot be empty"),
            ])));
        }

        self.repo.update(&patch).await?;
        Ok(())
    }

    /// Delete a list and, through the repository's transactional cascade,
    /// every contact it owns.
    pub async fn delete_list(&self, uuid: Uuid) -> Result<(), ServiceError> {
        self.repo.get_by_uuid(uuid).await?;
        self.repo.delete(uuid).await?;
        Ok(())
    }
}
