//! `SQLite` implementation of the `NoteRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use pressroom_core::{NewNote, Note, NoteRepository, RepositoryError};

use super::row_mappers::{insert_err, row_to_note, storage_err};

const NOTE_COLUMNS: &str = "id, title, text, slug, author_id";

/// `SQLite` implementation of the `NoteRepository` trait.
pub struct SqliteNoteRepository {
    pool: SqlitePool,
}

impl SqliteNoteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NoteRepository for SqliteNoteRepository {
    async fn insert(&self, note: &NewNote) -> Result<Note, RepositoryError> {
        let result =
            sqlx::query("INSERT INTO notes (title, text, slug, author_id) VALUES (?, ?, ?, ?)")
                .bind(&note.title)
                .bind(&note.text)
                .bind(&note.slug)
                .bind(note.author_id)
                .execute(&self.pool)
                .await
                .map_err(|e| insert_err(e, &format!("note with slug '{}'", note.slug)))?;

        self.get_by_id(result.last_insert_rowid()).await
    }

    async fn get_by_id(&self, id: i64) -> Result<Note, RepositoryError> {
        let query = format!("SELECT {NOTE_COLUMNS} FROM notes WHERE id = ?");
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_err)?
            .ok_or_else(|| RepositoryError::NotFound(format!("note with id {id}")))?;

        row_to_note(&row)
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Note, RepositoryError> {
        let query = format!("SELECT {NOTE_COLUMNS} FROM notes WHERE slug = ?");
        let row = sqlx::query(&query)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_err)?
            .ok_or_else(|| RepositoryError::NotFound(format!("note with slug '{slug}'")))?;

        row_to_note(&row)
    }

    async fn slug_exists(
        &self,
        slug: &str,
        exclude_id: Option<i64>,
    ) -> Result<bool, RepositoryError> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM notes WHERE slug = ? AND id != ?")
                .bind(slug)
                .bind(exclude_id.unwrap_or(-1))
                .fetch_one(&self.pool)
                .await
                .map_err(storage_err)?;
        Ok(count > 0)
    }

    async fn list_for_author(&self, author_id: i64) -> Result<Vec<Note>, RepositoryError> {
        let query = format!("SELECT {NOTE_COLUMNS} FROM notes WHERE author_id = ? ORDER BY id ASC");
        let rows = sqlx::query(&query)
            .bind(author_id)
            .fetch_all(&self.pool)
            .await
            .map_err(storage_err)?;

        rows.iter().map(row_to_note).collect()
    }

    async fn update(
        &self,
        id: i64,
        title: &str,
        text: &str,
        slug: &str,
    ) -> Result<Note, RepositoryError> {
        let result = sqlx::query("UPDATE notes SET title = ?, text = ?, slug = ? WHERE id = ?")
            .bind(title)
            .bind(text)
            .bind(slug)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| insert_err(e, &format!("note with slug '{slug}'")))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("note with id {id}")));
        }
        self.get_by_id(id).await
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM notes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(storage_err)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("note with id {id}")));
        }
        Ok(())
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM notes")
            .fetch_one(&self.pool)
            .await
            .map_err(storage_err)?;
        Ok(count)
    }
}
