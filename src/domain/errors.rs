//! Repository-level error taxonomy.

use thiserror::Error;

/// Errors surfaced by repository implementations.
///
/// Repositories never swallow errors: a missing row is `NotFound`, a
/// unique-constraint violation detected by the database is `Conflict`,
/// and everything else is an opaque `Database` failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepoError {
    /// No row matched the requested external uuid.
    #[error("record not found")]
    NotFound,

    /// A uniqueness constraint was violated at storage time.
    ///
    /// This is the authoritative duplicate signal; application-level
    /// pre-checks are only a fast path.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Any other storage or transport failure.
    #[error("database error: {0}")]
    Database(String),
}
