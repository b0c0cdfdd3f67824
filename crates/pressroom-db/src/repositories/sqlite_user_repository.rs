//! `SQLite` implementation of the `UserRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use pressroom_core::{NewUser, RepositoryError, User, UserRepository};

use super::row_mappers::{insert_err, row_to_user, storage_err};

/// `SQLite` implementation of the `UserRepository` trait.
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn insert(&self, user: &NewUser) -> Result<User, RepositoryError> {
        let result = sqlx::query("INSERT INTO users (username, password_hash) VALUES (?, ?)")
            .bind(&user.username)
            .bind(&user.password_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| insert_err(e, &format!("user '{}'", user.username)))?;

        self.get_by_id(result.last_insert_rowid()).await
    }

    async fn get_by_id(&self, id: i64) -> Result<User, RepositoryError> {
        let row = sqlx::query("SELECT id, username FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_err)?
            .ok_or_else(|| RepositoryError::NotFound(format!("user with id {id}")))?;

        row_to_user(&row)
    }

    async fn get_by_username(&self, username: &str) -> Result<User, RepositoryError> {
        let row = sqlx::query("SELECT id, username FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_err)?
            .ok_or_else(|| RepositoryError::NotFound(format!("user '{username}'")))?;

        row_to_user(&row)
    }

    async fn password_hash(&self, username: &str) -> Result<String, RepositoryError> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT password_hash FROM users WHERE username = ?")
                .bind(username)
                .fetch_optional(&self.pool)
                .await
                .map_err(storage_err)?;

        row.map(|(hash,)| hash)
            .ok_or_else(|| RepositoryError::NotFound(format!("user '{username}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::setup_test_database;

    async fn repo() -> SqliteUserRepository {
        SqliteUserRepository::new(setup_test_database().await.unwrap())
    }

    fn new_user(username: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            password_hash: "salt$digest".to_string(),
        }
    }

    #[tokio::test]
    async fn insert_and_fetch() {
        let repo = repo().await;
        let user = repo.insert(&new_user("warfolomey")).await.unwrap();

        assert_eq!(repo.get_by_id(user.id).await.unwrap(), user);
        assert_eq!(repo.get_by_username("warfolomey").await.unwrap(), user);
        assert_eq!(repo.password_hash("warfolomey").await.unwrap(), "salt$digest");
    }

    #[tokio::test]
    async fn duplicate_username_is_already_exists() {
        let repo = repo().await;
        repo.insert(&new_user("danil")).await.unwrap();

        let err = repo.insert(&new_user("danil")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::AlreadyExists(_)));
    }

    #[tokio::test]
    async fn missing_user_is_not_found() {
        let repo = repo().await;
        let err = repo.get_by_username("nobody").await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(_)));
    }
}
