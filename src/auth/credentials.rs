use std::sync::Arc;

use log::debug;

use crate::auth::password::{hash_password, verify_password};
use crate::error::AppError;
use crate::models::User;
use crate::repositories::UserRepository;

/// Returned for unknown usernames and wrong passwords alike.
pub const INVALID_CREDENTIALS: &str = "Incorrect login or password";

/// Stores usernames with bcrypt-hashed passwords and checks logins against them.
#[derive(Clone)]
pub struct CredentialStore {
    users: Arc<dyn UserRepository>,
    bcrypt_cost: u32,
}

impl CredentialStore {
    pub fn new(users: Arc<dyn UserRepository>, bcrypt_cost: u32) -> Self {
        Self { users, bcrypt_cost }
    }

    /// Hashes `password` and persists a new user.
    ///
    /// Fails with `AppError::DuplicateUser` if `username` is already registered;
    /// the existing account is left unchanged.
    pub async fn create(&self, username: &str, password: &str) -> Result<User, AppError> {
        let hashed_password = hash_password(password, self.bcrypt_cost)?;
        self.users.insert(username, &hashed_password).await
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        self.users.find_by_username(username).await
    }

    pub fn verify(&self, password: &str, hashed_password: &str) -> Result<bool, AppError> {
        verify_password(password, hashed_password)
    }

    /// Returns the user if `password` matches, otherwise `AppError::BadRequest`
    /// with the same message for unknown users and wrong passwords.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User, AppError> {
        match self.find_by_username(username).await? {
            Some(user) if self.verify(password, &user.hashed_password)? => Ok(user),
            Some(_) => {
                debug!("Password mismatch for user '{}'", username);
                Err(AppError::BadRequest(INVALID_CREDENTIALS.into()))
            }
            None => {
                debug!("Login attempt for unknown user '{}'", username);
                Err(AppError::BadRequest(INVALID_CREDENTIALS.into()))
            }
        }
    }
}
