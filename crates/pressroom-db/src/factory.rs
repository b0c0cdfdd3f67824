//! Composition utilities for building repository sets with `SQLite` backends.
//!
//! This module is focused purely on construction and contains no domain
//! logic.

use sqlx::SqlitePool;
use std::sync::Arc;

use pressroom_core::Repos;

use crate::repositories::{
    SqliteCommentRepository, SqliteNewsRepository, SqliteNoteRepository, SqliteSessionRepository,
    SqliteUserRepository,
};

/// Factory for creating repository instances with `SQLite` backends.
pub struct StoreFactory;

impl StoreFactory {
    /// Create a `SQLite` connection pool from a URL.
    pub async fn create_pool(db_url: &str) -> anyhow::Result<SqlitePool> {
        let pool = SqlitePool::connect(db_url).await?;
        Ok(pool)
    }

    /// Build all `SQLite` repositories from a pool.
    ///
    /// This is the recommended way for adapters to obtain repositories.
    /// Returns the trait-object-wrapped `Repos` aggregate from
    /// `pressroom-core`.
    pub fn build_repos(pool: SqlitePool) -> Repos {
        Repos::new(
            Arc::new(SqliteUserRepository::new(pool.clone())),
            Arc::new(SqliteSessionRepository::new(pool.clone())),
            Arc::new(SqliteNewsRepository::new(pool.clone())),
            Arc::new(SqliteCommentRepository::new(pool.clone())),
            Arc::new(SqliteNoteRepository::new(pool)),
        )
    }
}
