#![doc = "The `taskapi` library crate."]
#![doc = ""]
#![doc = "User registration, token login, and task creation/lookup over SQLite."]
#![doc = "The binary (`main.rs`) loads `Config`, opens the pool, builds `AppState`"]
#![doc = "and mounts `routes::config`."]

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;

pub use crate::config::Config;
pub use crate::error::AppError;
pub use crate::state::AppState;
