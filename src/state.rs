//! Application state shared with every handler through `web::Data`.
//!
//! Built once at startup from an explicit pool and `Config`; read-only
//! afterwards and cheap to clone across workers.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::{CredentialStore, TokenService};
use crate::config::Config;
use crate::repositories::{SqliteStore, TaskRepository};

#[derive(Clone)]
pub struct AppState {
    pub credentials: CredentialStore,
    pub tasks: Arc<dyn TaskRepository>,
    pub tokens: TokenService,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: &Config) -> Self {
        let store = Arc::new(SqliteStore::new(pool));

        Self {
            credentials: CredentialStore::new(store.clone(), config.bcrypt_cost),
            tasks: store,
            tokens: TokenService::new(&config.jwt_secret, config.access_token_ttl()),
        }
    }
}
