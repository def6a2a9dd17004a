//! Application layer services implementing the workflows.
//!
//! Services consume repository traits and provide the API used by HTTP
//! handlers and the admin binary.
//!
//! - [`services::registration_service::RegistrationService`] - Destination validation and slug allocation
//! - [`services::resolution_service::ResolutionService`] - Slug lookup and redirect target assembly
//! - [`services::auth_service::AuthService`] - Registration token gate

pub mod services;
