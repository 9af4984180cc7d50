//! Contact repository port.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Contact, ContactPatch, NewContact, RepoError};

/// Repository port for contact persistence.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Fetch contacts in insertion order.
    ///
    /// `name` matches a substring of the first OR last name; `mobile`
    /// and `email` match substrings of their fields. Filters combine
    /// with AND; empty strings are no-ops. `limit`/`offset` apply only
    /// when positive.
    async fn get_all(
        &self,
        name: &str,
        mobile: &str,
        email: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Contact>, RepoError>;

    /// Fetch a single contact by its external uuid.
    ///
    /// # Errors
    ///
    /// - `NotFound` when no contact has that uuid
    async fn get_by_uuid(&self, uuid: Uuid) -> Result<Contact, RepoError>;

    /// Insert a new contact.
    ///
    /// # Errors
    ///
    /// - `Conflict` when the uuid, email, or mobile already exists
    async fn create(&self, contact: &NewContact) -> Result<(), RepoError>;

    /// Apply a partial update; only supplied fields overwrite.
    ///
    /// # Errors
    ///
    /// - `NotFound` when no contact has the patch's uuid
    /// - `Conflict` when a new email or mobile collides with another row
    async fn update(&self, patch: &ContactPatch) -> Result<(), RepoError>;

    /// Delete a contact (fetch-then-delete).
    ///
    /// # Errors
    ///
    /// - `NotFound` when no contact has that uuid
    async fn delete(&self, uuid: Uuid) -> Result<(), RepoError>;

    /// Referential-integrity probe: does a list with this internal id exist?
    async fn list_exists(&self, list_id: i64) -> Result<bool, RepoError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn ContactRepository) {}
    }
}
