//! PostgreSQL implementation of ListRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder, Row};
use uuid::Uuid;

use crate::domain::{List, ListPatch, NewList, RepoError};
use crate::ports::ListRepository;

use super::{escape_like, map_sqlx_err};

/// PostgreSQL implementation of ListRepository.
#[derive(Clone)]
pub struct PgListRepository {
    pool: PgPool,
}

impl PgListRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ListRepository for PgListRepository {
    async fn get_all(&self, name: &str, limit: i64, offset: i64) -> Result<Vec<List>, RepoError> {
        let mut qb: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT id, uuid, name FROM lists");
        if !name.is_empty() {
            qb.push(" WHERE name LIKE ");
            qb.push_bind(format!("%{}%", escape_like(name)));
        }
        // Insertion order; limit/offset only restrict when positive.
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

        rows.into_iter().map(row_to_list).collect()
    }

    async fn get_by_uuid(&self, uuid: Uuid) -> Result<List, RepoError> {
        let row = sqlx::query("SELECT id, uuid, name FROM lists WHERE uuid = $1")
            .bind(uuid)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_err)?;

        match row {
            Some(row) => row_to_list(row),
            None => Err(RepoError::NotFound),
        }
    }

    async fn create(&self, list: &NewList) -> Result<(), RepoError> {
        sqlx::query("INSERT INTO lists (uuid, name) VALUES ($1, $2)")
            .bind(list.uuid)
            .bind(&list.name)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_err)?;

        Ok(())
    }

    async fn update(&self, patch: &ListPatch) -> Result<(), RepoError> {
        let Some(name) = &patch.name else {
            // Nothing supplied; a missing row must still surface.
            return self.get_by_uuid(patch.uuid).await.map(|_| ());
        };

        let result = sqlx::query("UPDATE lists SET name = $2 WHERE uuid = $1")
            .bind(patch.uuid)
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_err)?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }

    async fn delete(&self, uuid: Uuid) -> Result<(), RepoError> {
        // Contact cleanup and list deletion must be atomic: neither step
        // applies unless both commit.
        let mut tx = self.pool.begin().await.map_err(map_sqlx_err)?;

        let row = sqlx::query("SELECT id FROM lists WHERE uuid = $1")
            .bind(uuid)
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx_err)?;
        let Some(row) = row else {
            return Err(RepoError::NotFound);
        };
        let list_id: i64 = row.try_get("id").map_err(map_sqlx_err)?;

        sqlx::query("DELETE FROM contacts WHERE list_id = $1")
            .bind(list_id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_err)?;

        sqlx::query("DELETE FROM lists WHERE id = $1")
            .bind(list_id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_err)?;

        tx.commit().await.map_err(map_sqlx_err)?;

        tracing::debug!(%uuid, list_id, "deleted list and its contacts");
        Ok(())
    }
}

fn row_to_list(row: sqlx::postgres::PgRow) -> Result<List, RepoError> {
    Ok(List {
        id: row.try_get("id").map_err(map_sqlx_err)?,
        uuid: row.try_get("uuid").map_err(map_sqlx_err)?,
        name: row.try_get("name").map_err(map_sqlx_err)?,
    })
}
