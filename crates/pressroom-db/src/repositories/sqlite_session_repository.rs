//! `SQLite` implementation of the `SessionRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use pressroom_core::{RepositoryError, SessionRepository};

use super::row_mappers::storage_err;

/// `SQLite` implementation of the `SessionRepository` trait.
pub struct SqliteSessionRepository {
    pool: SqlitePool,
}

impl SqliteSessionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for SqliteSessionRepository {
    async fn insert(&self, token: &str, user_id: i64) -> Result<(), RepositoryError> {
        sqlx::query("INSERT INTO sessions (token, user_id) VALUES (?, ?)")
            .bind(token)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(storage_err)?;
        Ok(())
    }

    async fn user_id_for(&self, token: &str) -> Result<Option<i64>, RepositoryError> {
        let row: Option<(i64,)> = sqlx::query_as("SELECT user_id FROM sessions WHERE token = ?")
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_err)?;
        Ok(row.map(|(id,)| id))
    }

    async fn delete(&self, token: &str) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM sessions WHERE token = ?")
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(storage_err)?;
        Ok(())
    }
}
