use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Query parameters accepted when creating a task.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct NewTask {
    /// Any string up to 10000 characters, including the empty string.
    #[validate(length(max = 10000))]
    pub title: String,

    /// Any string up to 10000 characters.
    #[validate(length(max = 10000))]
    pub description: String,
}

/// A task row as stored in the `tasks` table and returned by `GET /tasks/{id}`.
///
/// Tasks carry no owner: the creating account is authenticated but not recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: String,
}
