//! `SQLite` implementation of the `CommentRepository` trait.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use pressroom_core::{Comment, CommentRepository, NewComment, RepositoryError};

use super::row_mappers::{format_timestamp, row_to_comment, storage_err};

const COMMENT_COLUMNS: &str = "id, news_id, author_id, text, created";

/// `SQLite` implementation of the `CommentRepository` trait.
pub struct SqliteCommentRepository {
    pool: SqlitePool,
}

impl SqliteCommentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for SqliteCommentRepository {
    async fn insert(&self, comment: &NewComment) -> Result<Comment, RepositoryError> {
        let created = comment.created.unwrap_or_else(Utc::now);

        let result = sqlx::query(
            "INSERT INTO comments (news_id, author_id, text, created) VALUES (?, ?, ?, ?)",
        )
        .bind(comment.news_id)
        .bind(comment.author_id)
        .bind(&comment.text)
        .bind(format_timestamp(&created))
        .execute(&self.pool)
        .await
        .map_err(storage_err)?;

        self.get_by_id(result.last_insert_rowid()).await
    }

    async fn get_by_id(&self, id: i64) -> Result<Comment, RepositoryError> {
        let query = format!("SELECT {COMMENT_COLUMNS} FROM comments WHERE id = ?");
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_err)?
            .ok_or_else(|| RepositoryError::NotFound(format!("comment with id {id}")))?;

        row_to_comment(&row)
    }

    async fn list_for_news(&self, news_id: i64) -> Result<Vec<Comment>, RepositoryError> {
        let query = format!(
            "SELECT {COMMENT_COLUMNS} FROM comments WHERE news_id = ? ORDER BY created ASC, id ASC"
        );
        let rows = sqlx::query(&query)
            .bind(news_id)
            .fetch_all(&self.pool)
            .await
            .map_err(storage_err)?;

        rows.iter().map(row_to_comment).collect()
    }

    async fn update_text(&self, id: i64, text: &str) -> Result<Comment, RepositoryError> {
        let result = sqlx::query("UPDATE comments SET text = ? WHERE id = ?")
            .bind(text)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(storage_err)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("comment with id {id}")));
        }
        self.get_by_id(id).await
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM comments WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(storage_err)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("comment with id {id}")));
        }
        Ok(())
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM comments")
            .fetch_one(&self.pool)
            .await
            .map_err(storage_err)?;
        Ok(count)
    }
}
