//! Business logic services for the application layer.

pub mod auth_service;
pub mod registration_service;
pub mod resolution_service;

pub use auth_service::AuthService;
pub use registration_service::RegistrationService;
pub use resolution_service::ResolutionService;
