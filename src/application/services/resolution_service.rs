//! Resolution workflow: slug lookup and redirect target assembly.

use std::sync::Arc;

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;

/// Service that resolves slugs back to absolute URLs.
///
/// Resolution is a pure read; the only side effect is the log line emitted
/// by the redirect handler.
pub struct ResolutionService<M: MappingRepository> {
    repository: Arc<M>,
}

impl<M: MappingRepository> ResolutionService<M> {
    /// Creates a new resolution service.
    pub fn new(repository: Arc<M>) -> Self {
        Self { repository }
    }

    /// Retrieves the mapping stored under `slug`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UnknownSlug`] if nothing is stored under the slug.
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    pub async fn lookup(&self, slug: &str) -> Result<UrlMapping, AppError> {
        self.repository
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::UnknownSlug(slug.to_string()))
    }

    /// Resolves a slug to `scheme + "://" + destination`.
    ///
    /// # Errors
    ///
    /// See [`Self::lookup`].
    pub async fn resolve(&self, slug: &str) -> Result<String, AppError> {
        Ok(self.lookup(slug).await?.absolute_url())
    }
}
