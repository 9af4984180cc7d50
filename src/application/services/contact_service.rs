//! Contact lifecycle service.
//!
//! Carries the richest rule set: field formats, global email/mobile
//! uniqueness, and referential integrity against the owning list.
//! Create-mode and update-mode validation differ deliberately: create
//! validates every required field and the list reference, update only
//! validates supplied fields and never re-checks the list reference.
//! A supplied empty value is rejected, never treated as "unchanged";
//! omission is expressed by `None`.

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{
    is_valid_email, is_valid_mobile, Contact, ContactDraft, ContactPatch, NewContact,
    ValidationError, ValidationErrors,
};
use crate::ports::ContactRepository;

use super::ServiceError;

/// Validates and orchestrates contact operations over a [`ContactRepository`].
pub struct ContactService {
    repo: Arc<dyn ContactRepository>,
}

impl ContactService {
    pub fn new(repo: Arc<dyn ContactRepository>) -> Self {
        Self { repo }
    }

    /// Fetch a page of contacts with optional name/mobile/email filters.
    pub async fn get_all_contacts(
        &self,
        name: &str,
        mobile: &str,
        email: &str,
        page: i64,
        page_size: i64,
    ) -> Result<Vec<Contact>, ServiceError> {
        let offset = (page - 1) * page_size;
        Ok(self.repo.get_all(name, mobile, email, page_size, offset).await?)
    }

    pub async fn get_contact_by_uuid(&self, uuid: Uuid) -> Result<Contact, ServiceError> {
        Ok(self.repo.get_by_uuid(uuid).await?)
    }

    /// Create a contact, generating a fresh uuid when the caller supplied
    /// none. All create-mode violations are collected before failing.
    ///
    /// Returns the created contact's external uuid.
    pub async fn create_contact(&self, draft: ContactDraft) -> Result<Uuid, ServiceError> {
        let errs = self.validate_create(&draft).await;
        if !errs.is_empty() {
            return Err(ServiceError::validation(ValidationErrors::new(errs)));
        }

        let uuid = draft.uuid.unwrap_or_else(Uuid::new_v4);
        self.repo
            .create(&NewContact {
                uuid,
                first_name: draft.first_name,
                last_name: draft.last_name,
                mobile: draft.mobile,
                email: draft.email,
                country_code: draft.country_code,
                list_id: draft.list_id,
            })
            .await?;
        Ok(uuid)
    }

    /// Update a contact. Fails with `NotFound` when the uuid is unknown,
    /// then applies update-mode validation against the stored record.
    pub async fn update_contact(&self, patch: ContactPatch) -> Result<(), ServiceError> {
        let existing = self.repo.get_by_uuid(patch.uuid).await?;

        let errs = self.validate_update(&existing, &patch).await;
        if !errs.is_empty() {
            return Err(ServiceError::validation(ValidationErrors::new(errs)));
        }

        self.repo.update(&patch).await?;
        Ok(())
    }

    pub async fn delete_contact(&self, uuid: Uuid) -> Result<(), ServiceError> {
        self.repo.get_by_uuid(uuid).await?;
        self.repo.delete(uuid).await?;
        Ok(())
    }

    async fn validate_create(&self, draft: &ContactDraft) -> Vec<ValidationError> {
        let mut errs = Vec::new();

        if draft.first_name.is_empty() {
            errs.push(ValidationError::new("FirstName", "first name cannot be empty"));
        }
        if draft.last_name.is_empty() {
            errs.push(ValidationError::new("LastName", "last name cannot be empty"));
        }
        if draft.email.is_empty() || !is_valid_email(&draft.email) {
            errs.push(ValidationError::new("Email", "invalid email format"));
        }
        if draft.mobile.is_empty() || !is_valid_mobile(&draft.mobile) {
            errs.push(ValidationError::new("Mobile", "invalid mobile format"));
        }
        if draft.country_code.chars().count() != 3 {
            errs.push(ValidationError::new(
                "CountryCode",
                "country code must be exactly 3 characters long",
            ));
        }
        if draft.list_id == 0 {
            errs.push(ValidationError::new("ListID", "contact must belong to a list"));
        }

        if !draft.email.is_empty() {
            self.check_email_unique(&draft.email, &mut errs).await;
        }
        if !draft.mobile.is_empty() {
            self.check_mobile_unique(&draft.mobile, &mut errs).await;
        }
        if draft.list_id != 0 {
            match self.repo.list_exists(draft.list_id).await {
                Ok(true) => {}
                Ok(false) => errs.push(ValidationError::new(
                    "ListID",
                    "the associated list does not exist",
                )),
                Err(err) => {
                    tracing::error!(%err, list_id = draft.list_id, "list existence check failed");
                    errs.push(ValidationError::new("ListID", "error checking list existence"));
                }
            }
        }

        errs
    }

    async fn validate_update(&self, existing: &Contact, patch: &ContactPatch) -> Vec<ValidationError> {
        let mut errs = Vec::new();

        if patch.first_name.as_deref() == Some("") {
            errs.push(ValidationError::new("FirstName", "first name cannot be empty"));
        }
        if patch.last_name.as_deref() == Some("") {
            errs.push(ValidationError::new("LastName", "last name cannot be empty"));
        }

        if let Some(email) = &patch.email {
            if email != &existing.email {
                if !is_valid_email(email) {
                    errs.push(ValidationError::new("Email", "invalid email format"));
                }
                self.check_email_unique(email, &mut errs).await;
            }
        }

        if let Some(mobile) = &patch.mobile {
            if mobile != &existing.mobile {
                if !is_valid_mobile(mobile) {
                    errs.push(ValidationError::new("Mobile", "invalid mobile format"));
                }
                self.check_mobile_unique(mobile, &mut errs).await;
            }
        }

        if let Some(country_code) = &patch.country_code {
            if country_code != &existing.country_code && country_code.chars().count() != 3 {
                errs.push(ValidationError::new(
                    "CountryCode",
                    "country code must be exactly 3 characters long",
                ));
            }
        }

        errs
    }

    /// Advisory uniqueness pre-check. A query failure degrades to a
    /// field-level error so a broken check can never let an invalid
    /// create through; the database unique index stays authoritative.
    async fn check_email_unique(&self, email: &str, errs: &mut Vec<ValidationError>) {
        match self.repo.get_all("", "", email, 1, 0).await {
            Ok(matches) if matches.is_empty() => {}
            Ok(_) => errs.push(ValidationError::new("Email", "email already exists")),
            Err(err) => {
                tracing::error!(%err, "email uniqueness check failed");
                errs.push(ValidationError::new("Email", "error checking email uniqueness"));
            }
        }
    }

    async fn check_mobile_unique(&self, mobile: &str, errs: &mut Vec<ValidationError>) {
        match self.repo.get_all("", mobile, "", 1, 0).await {
            Ok(matches) if matches.is_empty() => {}
            Ok(_) => errs.push(ValidationError::new("Mobile", "mobile already exists")),
            Err(err) => {
                tracing::error!(%err, "mobile uniqueness check failed");
                errs.push(ValidationError::new("Mobile", "error checking mobile uniqueness"));
            }
        }
    }
}
