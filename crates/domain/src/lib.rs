//! Domain layer for the contact manager.
//!
//! This crate contains:
//! - Domain models (Contact and its builder)
//! - Domain error types

pub mod errors;
pub mod models;

pub use errors::ContactError;
