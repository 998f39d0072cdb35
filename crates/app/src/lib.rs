//! Contact manager application.
//!
//! Wires configuration, logging and the persistence layer together and
//! drives the contact lifecycle demonstration.

pub mod config;
pub mod error;
pub mod lifecycle;
pub mod logging;
