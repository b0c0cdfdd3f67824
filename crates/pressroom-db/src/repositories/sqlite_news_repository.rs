//! `SQLite` implementation of the `NewsRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use pressroom_core::{NewNewsItem, NewsItem, NewsRepository, RepositoryError};

use super::row_mappers::{DATE_FORMAT, row_to_news, storage_err};

/// `SQLite` implementation of the `NewsRepository` trait.
pub struct SqliteNewsRepository {
    pool: SqlitePool,
}

impl SqliteNewsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NewsRepository for SqliteNewsRepository {
    async fn insert(&self, item: &NewNewsItem) -> Result<NewsItem, RepositoryError> {
        let result = sqlx::query("INSERT INTO news (title, text, date) VALUES (?, ?, ?)")
            .bind(&item.title)
            .bind(&item.text)
            .bind(item.date.format(DATE_FORMAT).to_string())
            .execute(&self.pool)
            .await
            .map_err(storage_err)?;

        self.get_by_id(result.last_insert_rowid()).await
    }

    async fn insert_many(&self, items: &[NewNewsItem]) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(storage_err)?;
        for item in items {
            sqlx::query("INSERT INTO news (title, text, date) VALUES (?, ?, ?)")
                .bind(&item.title)
                .bind(&item.text)
                .bind(item.date.format(DATE_FORMAT).to_string())
                .execute(&mut *tx)
                .await
                .map_err(storage_err)?;
        }
        tx.commit().await.map_err(storage_err)
    }

    async fn get_by_id(&self, id: i64) -> Result<NewsItem, RepositoryError> {
        let row = sqlx::query("SELECT id, title, text, date FROM news WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_err)?
            .ok_or_else(|| RepositoryError::NotFound(format!("news item with id {id}")))?;

        row_to_news(&row)
    }

    async fn list_recent(&self, limit: usize) -> Result<Vec<NewsItem>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT id, title, text, date FROM news ORDER BY date DESC, id DESC LIMIT ?",
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(storage_err)?;

        rows.iter().map(row_to_news).collect()
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM news")
            .fetch_one(&self.pool)
            .await
            .map_err(storage_err)?;
        Ok(count)
    }
}
