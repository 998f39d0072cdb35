//! Database connection pool management.

use serde::Deserialize;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;

use crate::error::PersistenceError;

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,

    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
}

fn default_max_connections() -> u32 {
    5
}
fn default_min_connections() -> u32 {
    1
}
fn default_connect_timeout() -> u64 {
    10
}
fn default_idle_timeout() -> u64 {
    600
}

impl DatabaseConfig {
    /// Single-connection in-memory database, mainly for tests.
    ///
    /// SQLite gives every connection its own in-memory database, so the pool
    /// must never open a second one.
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
            connect_timeout_secs: 10,
            idle_timeout_secs: 600,
        }
    }
}

/// Creates a SQLite connection pool with the given configuration.
pub async fn create_pool(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .connect_with(options)
        .await
}

/// Applies the embedded schema migrations.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), PersistenceError> {
    sqlx::migrate!("./src/migrations").run(pool).await?;
    Ok(())
}

/// Closes the pool, waiting for checked-out connections to be returned.
pub async fn close_pool(pool: &SqlitePool) {
    pool.close().await;
    tracing::debug!("Database pool closed");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_pool_runs_migrations() {
        let pool = create_pool(&DatabaseConfig::in_memory())
            .await
            .expect("Failed to create pool");
        run_migrations(&pool).await.expect("Failed to migrate");

        let tables: Vec<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'contacts'",
        )
        .fetch_all(&pool)
        .await
        .unwrap();
        assert_eq!(tables, vec!["contacts".to_string()]);

        close_pool(&pool).await;
        assert!(pool.is_closed());
    }

    #[tokio::test]
    async fn test_migrations_are_idempotent() {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        run_migrations(&pool).await.unwrap();
    }

    #[tokio::test]
    async fn test_unreachable_database_is_rejected() {
        let config = DatabaseConfig {
            url: "sqlite:///nonexistent-contact-dir/contacts.db".to_string(),
            ..DatabaseConfig::in_memory()
        };
        assert!(create_pool(&config).await.is_err());
    }
}
