//! Repository ports.
//!
//! Adapters depend on these traits; `pressroom-db` provides the SQLite
//! implementations and `StoreFactory` wires them into a [`Repos`].

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Comment, NewComment, NewNewsItem, NewNote, NewUser, NewsItem, Note, User};

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested record does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// A uniqueness constraint (username, slug) was violated.
    #[error("already exists: {0}")]
    AlreadyExists(String),

    /// Underlying storage failure.
    #[error("storage error: {0}")]
    Storage(String),
}

/// User account persistence.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, user: &NewUser) -> Result<User, RepositoryError>;
    async fn get_by_id(&self, id: i64) -> Result<User, RepositoryError>;
    async fn get_by_username(&self, username: &str) -> Result<User, RepositoryError>;
    /// Stored password digest for credential checks.
    async fn password_hash(&self, username: &str) -> Result<String, RepositoryError>;
}

/// Server-side session storage backing the session cookie.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn insert(&self, token: &str, user_id: i64) -> Result<(), RepositoryError>;
    /// Resolve a session token to its user, if the session exists.
    async fn user_id_for(&self, token: &str) -> Result<Option<i64>, RepositoryError>;
    async fn delete(&self, token: &str) -> Result<(), RepositoryError>;
}

/// News item persistence.
#[async_trait]
pub trait NewsRepository: Send + Sync {
    async fn insert(&self, item: &NewNewsItem) -> Result<NewsItem, RepositoryError>;
    /// Bulk insert used by fixtures to seed pagination tests.
    async fn insert_many(&self, items: &[NewNewsItem]) -> Result<(), RepositoryError>;
    async fn get_by_id(&self, id: i64) -> Result<NewsItem, RepositoryError>;
    /// Most recent items first (date descending, id descending within a day).
    async fn list_recent(&self, limit: usize) -> Result<Vec<NewsItem>, RepositoryError>;
    async fn count(&self) -> Result<i64, RepositoryError>;
}

/// Comment persistence.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn insert(&self, comment: &NewComment) -> Result<Comment, RepositoryError>;
    async fn get_by_id(&self, id: i64) -> Result<Comment, RepositoryError>;
    /// Comments for one news item, oldest first.
    async fn list_for_news(&self, news_id: i64) -> Result<Vec<Comment>, RepositoryError>;
    async fn update_text(&self, id: i64, text: &str) -> Result<Comment, RepositoryError>;
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
    async fn count(&self) -> Result<i64, RepositoryError>;
}

/// Note persistence.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    async fn insert(&self, note: &NewNote) -> Result<Note, RepositoryError>;
    async fn get_by_id(&self, id: i64) -> Result<Note, RepositoryError>;
    async fn get_by_slug(&self, slug: &str) -> Result<Note, RepositoryError>;
    /// Whether a slug is taken, optionally ignoring one note (for edits).
    async fn slug_exists(&self, slug: &str, exclude_id: Option<i64>)
    -> Result<bool, RepositoryError>;
    /// All notes belonging to one author, id ascending.
    async fn list_for_author(&self, author_id: i64) -> Result<Vec<Note>, RepositoryError>;
    async fn update(
        &self,
        id: i64,
        title: &str,
        text: &str,
        slug: &str,
    ) -> Result<Note, RepositoryError>;
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
    async fn count(&self) -> Result<i64, RepositoryError>;
}

/// Aggregate of all repositories, handed to adapters by the factory.
#[derive(Clone)]
pub struct Repos {
    pub users: Arc<dyn UserRepository>,
    pub sessions: Arc<dyn SessionRepository>,
    pub news: Arc<dyn NewsRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub notes: Arc<dyn NoteRepository>,
}

impl Repos {
    pub fn new(
        users: Arc<dyn UserRepository>,
        sessions: Arc<dyn SessionRepository>,
        news: Arc<dyn NewsRepository>,
        comments: Arc<dyn CommentRepository>,
        notes: Arc<dyn NoteRepository>,
    ) -> Self {
        Self {
            users,
            sessions,
            news,
            comments,
            notes,
        }
    }
}
