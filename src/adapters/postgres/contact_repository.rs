//! PostgreSQL implementation of ContactRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder, Row};
use uuid::Uuid;

use crate::domain::{Contact, ContactPatch, NewContact, RepoError};
use crate::ports::ContactRepository;

use super::{escape_like, map_sqlx_err};

const SELECT_COLUMNS: &str =
    "SELECT id, uuid, first_name, last_name, mobile, email, country_code, list_id FROM contacts";

/// PostgreSQL implementation of ContactRepository.
#[derive(Clone)]
pub struct PgContactRepository {
    pool: PgPool,
}

impl PgContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactRepository for PgContactRepository {
    async fn get_all(
        &self,
        name: &str,
        mobile: &str,
        email: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Contact>, RepoError> {
        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new(SELECT_COLUMNS);

        // Filters AND-combine; empty strings are no-ops.
        let mut has_where = false;
        let mut clause = |qb: &mut QueryBuilder<Postgres>| {
            qb.push(if has_where { " AND " } else { " WHERE " });
            has_where = true;
        };
        if !name.is_empty() {
            clause(&mut qb);
            let pattern = format!("%{}%", escape_like(name));
            qb.push("(first_name LIKE ");
            qb.push_bind(pattern.clone());
            qb.push(" OR last_name LIKE ");
            qb.push_bind(pattern);
            qb.push(")");
        }
        if !mobile.is_empty() {
            clause(&mut qb);
            qb.push("mobile LIKE ");
            qb.push_bind(format!("%{}%", escape_like(mobile)));
        }
        if !email.is_empty() {
            clause(&mut qb);
            qb.push("email LIKE ");
            qb.push_bind(format!("%{}%", escape_like(email)));
        }

        qb.push(" ORDER BY id");
        if limit > 0 {
            qb.push(" LIMIT ");
            qb.push_bind(limit);
        }
        if offset > 0 {
            qb.push(" OFFSET ");
            qb.push_bind(offset);
        }

        let rows = qb
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_err)?;

        rows.into_iter().map(row_to_contact).collect()
    }

    async fn get_by_uuid(&self, uuid: Uuid) -> Result<Contact, RepoError> {
        let row = sqlx::query(&format!("{SELECT_COLUMNS} WHERE uuid = $1"))
            .bind(uuid)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_err)?;

        match row {
            Some(row) => row_to_contact(row),
            None => Err(RepoError::NotFound),
        }
    }

    async fn create(&self, contact: &NewContact) -> Result<(), RepoError> {
        sqlx::query(
            r#"
            INSERT INTO contacts (
                uuid, first_name, last_name, mobile, email, country_code, list_id
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(contact.uuid)
        .bind(&contact.first_name)
        .bind(&contact.last_name)
        .bind(&contact.mobile)
        .bind(&contact.email)
        .bind(&contact.country_code)
        .bind(contact.list_id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        Ok(())
    }

    async fn update(&self, patch: &ContactPatch) -> Result<(), RepoError> {
        if patch.is_noop() {
            // Nothing supplied; a missing row must still surface.
            return self.get_by_uuid(patch.uuid).await.map(|_| ());
        }

        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE contacts SET ");
        let mut assignments = qb.separated(", ");
        if let Some(v) = &patch.first_name {
            assignments.push("first_name = ");
            assignments.push_bind_unseparated(v);
        }
        if let Some(v) = &patch.last_name {
            assignments.push("last_name = ");
            assignments.push_bind_unseparated(v);
        }
        if let Some(v) = &patch.mobile {
            assignments.push("mobile = ");
            assignments.push_bind_unseparated(v);
        }
        if let Some(v) = &patch.email {
            assignments.push("email = ");
            assignments.push_bind_unseparated(v);
        }
        if let Some(v) = &patch.country_code {
            assignments.push("country_code = ");
            assignments.push_bind_unseparated(v);
        }
        if let Some(v) = patch.list_id {
            assignments.push("list_id = ");
            assignments.push_bind_unseparated(v);
        }
        qb.push(" WHERE uuid = ");
        qb.push_bind(patch.uuid);

        let result = qb
            .build()
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_err)?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }

    async fn delete(&self, uuid: Uuid) -> Result<(), RepoError> {
        // Fetch-then-delete so an unknown uuid surfaces as NotFound.
        let row = sqlx::query("SELECT id FROM contacts WHERE uuid = $1")
            .bind(uuid)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_err)?;
        let Some(row) = row else {
            return Err(RepoError::NotFound);
        };
        let contact_id: i64 = row.try_get("id").map_err(map_sqlx_err)?;

        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(contact_id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_err)?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }

    async fn list_exists(&self, list_id: i64) -> Result<bool, RepoError> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM lists WHERE id = $1) AS found")
            .bind(list_id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_err)?;

        row.try_get("found").map_err(map_sqlx_err)
    }
}

fn row_to_contact(row: sqlx::postgres::PgRow) -> Result<Contact, RepoError> {
    Ok(Contact {
        id: row.try_get("id").map_err(map_sqlx_err)?,
        uuid: row.try_get("uuid").map_err(map_sqlx_err)?,
        first_name: row.try_get("first_name").map_err(map_sqlx_err)?,
        last_name: row.try_get("last_name").map_err(map_sqlx_err)?,
        mobile: row.try_get("mobile").map_err(map_sqlx_err)?,
        email: row.try_get("email").map_err(map_sqlx_err)?,
        country_code: row.try_get("country_code").map_err(map_sqlx_err)?,
        list_id: row.try_get("list_id").map_err(map_sqlx_err)?,
    })
}
