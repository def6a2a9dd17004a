//! SQLite persistence.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! - [`pool`] - Connection pool construction and migrations
//! - [`SqliteMappingRepository`] - Url mapping storage and lookup
//! - [`SqliteTokenRepository`] - Registration gate credentials

pub mod pool;
pub mod sqlite_mapping_repository;
pub mod sqlite_token_repository;

pub use pool::{MIGRATOR, PoolSettings, connect, connect_and_migrate};
pub use sqlite_mapping_repository::SqliteMappingRepository;
pub use sqlite_token_repository::SqliteTokenRepository;
