//! List entity and its write-side shapes.

use uuid::Uuid;

/// A named collection owning zero or more contacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List {
    /// Internal storage identity; never the external key.
    pub id: i64,
    /// External identity, immutable after creation.
    pub uuid: Uuid,
    pub name: String,
}

/// Caller-supplied input for list creation, before the service has
/// assigned an external uuid.
#[derive(Debug, Clone)]
pub struct ListDraft {
    pub uuid: Option<Uuid>,
    pub name: String,
}

/// A fully-formed list ready for insertion.
#[derive(Debug, Clone)]
pub struct NewList {
    pub uuid: Uuid,
    pub name: String,
}

/// Partial update for a list. `None` means "leave unchanged".
#[derive(Debug, Clone)]
pub struct ListPatch {
    pub uuid: Uuid,
    pub name: Option<String>,
}
