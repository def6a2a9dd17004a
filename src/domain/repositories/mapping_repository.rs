//! Repository trait for url mapping data access.

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the slug → destination relation.
///
/// The backing table enforces uniqueness on the slug. Each method is a single
/// statement, so atomicity comes from the store itself.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteMappingRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_mapping.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Inserts a new mapping and returns it with the assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ConstraintViolation`] if the slug already exists.
    /// Returns [`AppError::StoreUnavailable`] on connection or transport errors.
    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError>;

    /// Finds a mapping by exact, case-sensitive slug.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlMapping))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<UrlMapping>, AppError>;

    /// Counts stored mappings.
    async fn count(&self) -> Result<i64, AppError>;

    /// Round-trips a trivial statement to check connectivity.
    async fn ping(&self) -> Result<(), AppError>;
}
