//! Database module: models, schema and the storage access layer.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: `TriviaStorage`, one async method per storage operation

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{Category, NewQuestion, Question};
pub use schema::SQLITE_INIT;
pub use sqlite::{SqlitePool, TriviaStorage};

use crate::error::TriviaError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

/// Open (creating if necessary) the database and initialize the schema.
pub async fn spawn(database_url: &str) -> Result<TriviaStorage, TriviaError> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(options).await?;
    let storage = TriviaStorage::new(pool);
    storage.init_schema().await?;
    Ok(storage)
}
