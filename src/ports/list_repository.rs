//! List repository port.
//!
//! Defines the contract for persisting and querying lists. Adapters own
//! query construction, pagination, and the contact cascade on delete.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{List, ListPatch, NewList, RepoError};

/// Repository port for list persistence.
#[async_trait]
pub trait ListRepository: Send + Sync {
    /// Fetch lists in insertion order.
    ///
    /// A non-empty `name` restricts to lists whose name contains it.
    /// `limit`/`offset` apply only when positive; zero or negative means
    /// unrestricted, never an error.
    async fn get_all(&self, name: &str, limit: i64, offset: i64) -> Result<Vec<List>, RepoError>;

    /// Fetch a single list by its external uuid.
    ///
    /// # Errors
    ///
    /// - `NotFound` when no list has that uuid
    async fn get_by_uuid(&self, uuid: Uuid) -> Result<List, RepoError>;

    /// Insert a new list.
    ///
    /// # Errors
    ///
    /// - `Conflict` when the uuid already exists
    async fn create(&self, list: &NewList) -> Result<(), RepoError>;

    /// Apply a partial update; only supplied fields overwrite.
    ///
    /// # Errors
    ///
    /// - `NotFound` when no list has the patch's uuid
    async fn update(&self, patch: &ListPatch) -> Result<(), RepoError>;

    /// Delete a list and all contacts it owns, atomically.
    ///
    /// The contact cleanup and the list deletion run inside a single
    /// transaction: if either fails, neither is applied.
    ///
    /// # Errors
    ///
    /// - `NotFound` when no list has that uuid
    async fn delete(&self, uuid: Uuid) -> Result<(), RepoError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn ListRepository) {}
    }
}
