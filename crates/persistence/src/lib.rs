//! Persistence layer for the contact manager.
//!
//! This crate contains:
//! - Database connection management and schema migrations
//! - Entity definitions (database row mappings)
//! - Repository implementations

pub mod db;
pub mod entities;
pub mod error;
pub mod metrics;
pub mod repositories;

pub use error::PersistenceError;
