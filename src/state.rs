//! Shared application context.
//!
//! Built once in [`crate::server::run`] and cloned into every handler by Axum.
//! Nothing in it is mutated after startup.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::application::services::{AuthService, RegistrationService, ResolutionService};
use crate::infrastructure::persistence::{SqliteMappingRepository, SqliteTokenRepository};

pub type SqliteRegistrationService = RegistrationService<SqliteMappingRepository>;
pub type SqliteResolutionService = ResolutionService<SqliteMappingRepository>;
pub type SqliteAuthService = AuthService<SqliteTokenRepository>;

#[derive(Clone)]
pub struct AppState {
    pub registration_service: Arc<SqliteRegistrationService>,
    pub resolution_service: Arc<SqliteResolutionService>,
    /// Present only when the registration token gate is enabled.
    pub auth_service: Option<Arc<SqliteAuthService>>,
    pub mapping_repository: Arc<SqliteMappingRepository>,
    /// Host prefix used to build `short_url` in registration responses.
    pub public_host: Arc<str>,
}

impl AppState {
    /// Wires repositories and services over a shared pool.
    pub fn new(pool: Arc<SqlitePool>, public_host: &str, require_auth_token: bool) -> Self {
        let mapping_repository = Arc::new(SqliteMappingRepository::new(pool.clone()));

        let auth_service = require_auth_token.then(|| {
            Arc::new(AuthService::new(Arc::new(SqliteTokenRepository::new(
                pool.clone(),
            ))))
        });

        Self {
            registration_service: Arc::new(RegistrationService::new(mapping_repository.clone())),
            resolution_service: Arc::new(ResolutionService::new(mapping_repository.clone())),
            auth_service,
            mapping_repository,
            public_host: Arc::from(public_host.trim_end_matches('/')),
        }
    }
}
