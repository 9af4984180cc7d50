//! Contact entity and its write-side shapes.

use uuid::Uuid;

/// A person record belonging to exactly one list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    /// Internal storage identity; never the external key.
    pub id: i64,
    /// External identity, immutable after creation.
    pub uuid: Uuid,
    pub first_name: String,
    pub last_name: String,
    /// E.164 mobile number, globally unique across contacts.
    pub mobile: String,
    /// Lowercase email address, globally unique across contacts.
    pub email: String,
    /// Exactly 3 characters.
    pub country_code: String,
    /// Internal id of the owning list.
    pub list_id: i64,
}

/// Caller-supplied input for contact creation.
#[derive(Debug, Clone)]
pub struct ContactDraft {
    pub uuid: Option<Uuid>,
    pub first_name: String,
    pub last_name: String,
    pub mobile: String,
    pub email: String,
    pub country_code: String,
    pub list_id: i64,
}

/// A fully-formed contact ready for insertion.
#[derive(Debug, Clone)]
pub struct NewContact {
    pub uuid: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub mobile: String,
    pub email: String,
    pub country_code: String,
    pub list_id: i64,
}

/// Partial update for a contact. `None` means "leave unchanged", which
/// removes the ambiguity of empty-string sentinels.
#[derive(Debug, Clone, Default)]
pub struct ContactPatch {
    pub uuid: Uuid,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub mobile: Option<String>,
    pub email: Option<String>,
    pub country_code: Option<String>,
    pub list_id: Option<i64>,
}

impl ContactPatch {
    /// True when no field is supplied.
    pub fn is_noop(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.mobile.is_none()
            && self.email.is_none()
            && self.country_code.is_none()
            && self.list_id.is_none()
    }
}
