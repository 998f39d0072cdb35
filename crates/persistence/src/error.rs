//! Persistence error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Contact {0} not found")]
    NotFound(i64),

    #[error("Contact has not been saved yet")]
    Transient,

    #[error("Contact {0} is already persisted")]
    AlreadyPersisted(i64),
}
