use sqlx::FromRow;

/// A registered account as stored in the `users` table.
///
/// Users are created at registration and never updated or removed. Not
/// `Serialize`: the password hash must never reach a response.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub hashed_password: String,
}
