//! Repository trait for auth token storage.

use crate::domain::entities::AuthToken;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the credentials behind the registration gate.
///
/// Tokens are stored verbatim; the gate only checks for an exact match.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteTokenRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_token.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Returns true if `token` matches a stored value exactly.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    async fn exists(&self, token: &str) -> Result<bool, AppError>;

    /// Stores a new token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ConstraintViolation`] if the token is already stored.
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    async fn create(&self, token: &str) -> Result<AuthToken, AppError>;

    /// Lists all tokens, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    async fn list(&self) -> Result<Vec<AuthToken>, AppError>;
}
