//! Token gate for the registration endpoint.

use std::sync::Arc;

use crate::domain::entities::AuthToken;
use crate::domain::repositories::TokenRepository;
use crate::error::AppError;
use crate::utils::slug_generator::generate_token;

/// Service for checking and issuing registration tokens.
///
/// The gate compares the presented value with stored tokens verbatim.
pub struct AuthService<R: TokenRepository> {
    repository: Arc<R>,
}

impl<R: TokenRepository> AuthService<R> {
    /// Creates a new authentication service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Extracts the token from an `Authorization` header value.
    ///
    /// Surrounding whitespace and an optional `Bearer ` prefix are removed.
    fn extract_token(header: &str) -> &str {
        let header = header.trim();
        match header.get(..7) {
            Some(prefix) if prefix.eq_ignore_ascii_case("bearer ") => header[7..].trim(),
            _ => header,
        }
    }

    /// Authenticates an `Authorization` header value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the header is missing, empty, or
    /// does not match a stored token.
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    pub async fn authenticate(&self, header: Option<&str>) -> Result<(), AppError> {
        let token = header.map(Self::extract_token).unwrap_or("");

        if token.is_empty() {
            return Err(AppError::Unauthorized);
        }

        if !self.repository.exists(token).await? {
            return Err(AppError::Unauthorized);
        }

        Ok(())
    }

    /// Generates and stores a fresh token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::RandomSourceUnavailable`] if no token can be generated.
    /// Returns [`AppError::ConstraintViolation`] or [`AppError::StoreUnavailable`]
    /// from the store.
    pub async fn issue_token(&self) -> Result<AuthToken, AppError> {
        let token = generate_token()?;
        self.repository.create(&token).await
    }
}
