//! Narrow storage interfaces used by the request handlers.
//!
//! Handlers only see `UserRepository` and `TaskRepository`; `SqliteStore`
//! is the one implementation and owns the connection pool.

pub mod tasks;
pub mod users;

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::error::AppError;
use crate::models::{Task, User};

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a user with an already-hashed password.
    ///
    /// Returns `AppError::DuplicateUser` when the username is taken.
    async fn insert(&self, username: &str, hashed_password: &str) -> Result<User, AppError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;
}

#[async_trait]
pub trait TaskRepository: Send + Sync {
    async fn insert(&self, title: &str, description: &str) -> Result<Task, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Task>, AppError>;
}

/// SQLite-backed storage handle shared by every worker.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
