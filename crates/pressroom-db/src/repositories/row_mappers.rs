//! Row mapping helpers for `SQLite` queries.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use pressroom_core::{Comment, NewsItem, Note, RepositoryError, User};

/// Stored format for news dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn storage_err(e: impl std::fmt::Display) -> RepositoryError {
    RepositoryError::Storage(e.to_string())
}

/// Serialize a timestamp the way the comments table stores it.
///
/// A fixed UTC format keeps the column lexicographically ordered, so
/// `ORDER BY created` matches chronological order.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()
}

pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Storage(format!("bad timestamp '{raw}': {e}")))
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, RepositoryError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|e| RepositoryError::Storage(format!("bad date '{raw}': {e}")))
}

pub fn row_to_user(row: &SqliteRow) -> Result<User, RepositoryError> {
    Ok(User {
        id: row.try_get("id").map_err(storage_err)?,
        username: row.try_get("username").map_err(storage_err)?,
    })
}

pub fn row_to_news(row: &SqliteRow) -> Result<NewsItem, RepositoryError> {
    let date: String = row.try_get("date").map_err(storage_err)?;
    Ok(NewsItem {
        id: row.try_get("id").map_err(storage_err)?,
        title: row.try_get("title").map_err(storage_err)?,
        text: row.try_get("text").map_err(storage_err)?,
        date: parse_date(&date)?,
    })
}

pub fn row_to_comment(row: &SqliteRow) -> Result<Comment, RepositoryError> {
    let created: String = row.try_get("created").map_err(storage_err)?;
    Ok(Comment {
        id: row.try_get("id").map_err(storage_err)?,
        news_id: row.try_get("news_id").map_err(storage_err)?,
        author_id: row.try_get("author_id").map_err(storage_err)?,
        text: row.try_get("text").map_err(storage_err)?,
        created: parse_timestamp(&created)?,
    })
}

pub fn row_to_note(row: &SqliteRow) -> Result<Note, RepositoryError> {
    Ok(Note {
        id: row.try_get("id").map_err(storage_err)?,
        title: row.try_get("title").map_err(storage_err)?,
        text: row.try_get("text").map_err(storage_err)?,
        slug: row.try_get("slug").map_err(storage_err)?,
        author_id: row.try_get("author_id").map_err(storage_err)?,
    })
}

/// Map a sqlx error on insert, distinguishing uniqueness violations.
pub fn insert_err(e: sqlx::Error, what: &str) -> RepositoryError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return RepositoryError::AlreadyExists(what.to_string());
        }
    }
    storage_err(e)
}
