use async_trait::async_trait;

use super::{SqliteStore, UserRepository};
use crate::error::AppError;
use crate::models::User;

#[async_trait]
impl UserRepository for SqliteStore {
    async fn insert(&self, username: &str, hashed_password: &str) -> Result<User, AppError> {
        let mut conn = self.pool().acquire().await?;

        sqlx::query_as::<_, User>(
            "INSERT INTO users (username, hashed_password) VALUES (?, ?)
             RETURNING id, username, hashed_password",
        )
        .bind(username)
        .bind(hashed_password)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::DuplicateUser(username.to_string())
            }
            other => other.into(),
        })
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let mut conn = self.pool().acquire().await?;

        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, hashed_password FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(user)
    }
}
