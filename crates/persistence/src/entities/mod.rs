//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod contact;

pub use contact::ContactEntity;
