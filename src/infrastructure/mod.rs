//! Infrastructure layer for external integrations.
//!
//! Implements the repository traits defined by the domain layer.
//!
//! - [`persistence`] - SQLite pool setup and repository implementations

pub mod persistence;
