//! Registration workflow: validate, generate a slug, persist.

use std::sync::Arc;
use tokio_retry::RetryIf;
use tokio_retry::strategy::FixedInterval;

use crate::domain::entities::{DEFAULT_SCHEME, MappingCandidate, NewUrlMapping, UrlMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;
use crate::utils::destination::validate_destination;
use crate::utils::slug_generator::generate_slug;

/// Maximum slug generate + insert attempts per registration.
pub const MAX_ATTEMPTS: usize = 5;

/// Resolves the requested scheme. Empty or absent means `https`.
///
/// # Errors
///
/// Returns [`AppError::UnsupportedScheme`] for anything other than `""` or `"https"`.
pub fn normalize_scheme(scheme: Option<&str>) -> Result<&'static str, AppError> {
    match scheme.unwrap_or("") {
        "" | DEFAULT_SCHEME => Ok(DEFAULT_SCHEME),
        other => Err(AppError::UnsupportedScheme(other.to_string())),
    }
}

/// Service that turns a submitted destination into a stored mapping.
///
/// All validation happens before the insert, so a failed registration
/// never leaves a row behind.
pub struct RegistrationService<M: MappingRepository> {
    repository: Arc<M>,
}

impl<M: MappingRepository> RegistrationService<M> {
    /// Creates a new registration service.
    pub fn new(repository: Arc<M>) -> Self {
        Self { repository }
    }

    /// Registers a candidate and returns the stored mapping.
    ///
    /// # Collision handling
    ///
    /// Slug generation and the insert are retried together up to
    /// [`MAX_ATTEMPTS`] times when the store reports a uniqueness violation.
    /// Any other error stops the loop immediately.
    ///
    /// # Errors
    ///
    /// - [`AppError::DestinationTooLong`], [`AppError::MalformedDestination`],
    ///   [`AppError::UnsupportedScheme`] for invalid input
    /// - [`AppError::RandomSourceUnavailable`] if no slug can be generated
    /// - [`AppError::ConstraintViolation`] after [`MAX_ATTEMPTS`] collisions
    /// - [`AppError::StoreUnavailable`] on database errors
    pub async fn register(&self, candidate: MappingCandidate) -> Result<UrlMapping, AppError> {
        let destination = validate_destination(&candidate.destination)?;
        let scheme = normalize_scheme(candidate.scheme.as_deref())?;

        let this = self;
        let destination = destination.as_str();

        let strategy = FixedInterval::from_millis(1).take(MAX_ATTEMPTS - 1);

        let mapping = RetryIf::spawn(
            strategy,
            move || this.insert_with_fresh_slug(destination, scheme),
            |e: &AppError| {
                let collided = e.is_constraint_violation();
                if collided {
                    tracing::warn!(destination, "Slug collision, regenerating");
                }
                collided
            },
        )
        .await?;

        tracing::info!(
            id = mapping.id,
            slug = %mapping.slug,
            destination = %mapping.destination,
            "{}",
            crate::utils::highlight::registered_message(&mapping.slug, &mapping.destination)
        );

        Ok(mapping)
    }

    async fn insert_with_fresh_slug(
        &self,
        destination: &str,
        scheme: &str,
    ) -> Result<UrlMapping, AppError> {
        let slug = generate_slug()?;

        self.repository
            .insert(NewUrlMapping {
                slug,
                destination: destination.to_string(),
                scheme: scheme.to_string(),
            })
            .await
    }
}
