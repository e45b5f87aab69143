use async_trait::async_trait;

use super::{SqliteStore, TaskRepository};
use crate::error::AppError;
use crate::models::Task;

#[async_trait]
impl TaskRepository for SqliteStore {
    async fn insert(&self, title: &str, description: &str) -> Result<Task, AppError> {
        let mut conn = self.pool().acquire().await?;

        let task = sqlx::query_as::<_, Task>(
            "INSERT INTO tasks (title, description) VALUES (?, ?)
             RETURNING id, title, description",
        )
        .bind(title)
        .bind(description)
        .fetch_one(&mut *conn)
        .await?;

        Ok(task)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Task>, AppError> {
        let mut conn = self.pool().acquire().await?;

        let task =
            sqlx::query_as::<_, Task>("SELECT id, title, description FROM tasks WHERE id = ?")
                .bind(id)
                .fetch_optional(&mut *conn)
                .await?;

        Ok(task)
    }
}
