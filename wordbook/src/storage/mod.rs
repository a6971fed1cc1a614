use crate::config::StoreConfig;
use crate::error::AppError;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Opens the word store pool and makes sure the word tables exist.
pub async fn connect(config: &StoreConfig) -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str(&config.db_url)?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;
    MIGRATOR.run(&pool).await?;
    tracing::debug!("word store ready at {}", config.db_url);
    Ok(pool)
}

/// A private in-memory store. Limited to one connection, since every sqlite
/// memory connection is its own database.
pub async fn connect_in_memory() -> Result<SqlitePool, AppError> {
    connect(&StoreConfig {
        db_url: "sqlite::memory:".to_string(),
        max_connections: 1,
        aws_region: None,
        bucket: None,
    })
    .await
}
