//! Repository implementations using `SQLite`.
//!
//! These implementations encapsulate all SQL queries and database access.
//! The `SqlitePool` is confined to this module and never exposed through
//! the port trait signatures.

mod row_mappers;
mod sqlite_comment_repository;
mod sqlite_news_repository;
mod sqlite_note_repository;
mod sqlite_session_repository;
mod sqlite_user_repository;

pub use sqlite_comment_repository::SqliteCommentRepository;
pub use sqlite_news_repository::SqliteNewsRepository;
pub use sqlite_note_repository::SqliteNoteRepository;
pub use sqlite_session_repository::SqliteSessionRepository;
pub use sqlite_user_repository::SqliteUserRepository;
