//! PostgreSQL adapters: pool construction, initial schema, repositories.

mod contact_repository;
mod list_repository;

pub use contact_repository::PgContactRepository;
pub use list_repository::PgListRepository;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;
use crate::domain::RepoError;

/// Builds the connection pool from configuration.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(config.idle_timeout())
        .max_lifetime(config.max_lifetime())
        .connect(&config.url)
        .await
}

/// Creates the tables and unique indexes on startup.
///
/// Uniqueness of `uuid`, `email`, and `mobile` is enforced here, at the
/// storage layer; the services' pre-checks are only advisory. There is
/// deliberately no foreign key from contacts to lists: the cascade on
/// list deletion is repository-enforced inside a transaction.
pub async fn init_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS lists (
            id BIGSERIAL PRIMARY KEY,
            uuid UUID NOT NULL UNIQUE,
            name VARCHAR(255) NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS contacts (
            id BIGSERIAL PRIMARY KEY,
            uuid UUID NOT NULL UNIQUE,
            first_name VARCHAR(255) NOT NULL,
            last_name VARCHAR(255) NOT NULL,
            mobile VARCHAR(20) NOT NULL UNIQUE,
            email VARCHAR(255) NOT NULL UNIQUE,
            country_code VARCHAR(3) NOT NULL,
            list_id BIGINT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// SQLSTATE for unique-constraint violations.
const UNIQUE_VIOLATION: &str = "23505";

/// Escapes LIKE metacharacters so a filter value matches literally.
///
/// Filter values (and the uniqueness pre-check's exact email/mobile)
/// end up inside `LIKE '%…%'` patterns, where a bare `_` or `%` would
/// act as a wildcard instead of a character.
pub(crate) fn escape_like(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Translates driver errors into the repository taxonomy. A 23505 is the
/// authoritative duplicate signal and must stay distinguishable from
/// generic failure.
pub(crate) fn map_sqlx_err(err: sqlx::Error) -> RepoError {
    match &err {
        sqlx::Error::RowNotFound => RepoError::NotFound,
        sqlx::Error::Database(db) if db.code().as_deref() == Some(UNIQUE_VIOLATION) => {
            RepoError::Conflict(db.message().to_string())
        }
        _ => RepoError::Database(err.to_string()),
    }
}
