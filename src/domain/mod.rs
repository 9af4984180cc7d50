//! Domain layer containing entities, validation, and error taxonomy.
//!
//! # Module Organization
//!
//! - `list` - List entity and write-side shapes
//! - `contact` - Contact entity and write-side shapes
//! - `validation` - Field-level validation aggregator and format patterns
//! - `errors` - Repository error taxonomy

pub mod contact;
pub mod errors;
pub mod list;
pub mod validation;

pub use contact::{Contact, ContactDraft, ContactPatch, NewContact};
pub use errors::RepoError;
pub use list::{List, ListDraft, ListPatch, NewList};
pub use validation::{is_valid_email, is_valid_mobile, ValidationError, ValidationErrors};
