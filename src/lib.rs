//! # shorty
//!
//! A small URL shortening service built with Axum and SQLite.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and repository traits
//! - **Application Layer** ([`application`]) - Registration, resolution and token gate workflows
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite pool and repositories
//! - **API Layer** ([`api`]) - Handlers, DTOs and middleware
//!
//! ## Endpoints
//!
//! - `POST /new-url` - Register a destination, receive an 11-character slug
//! - `GET /{slug}` - `301` redirect to `https://<destination>`
//! - `GET /health` - Database health check
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://shorty.db?mode=rwc"
//! cargo run
//!
//! curl -H 'Content-Type: application/json' -H 'Accept: application/json' \
//!      -d '{"long_url": "example.com/page"}' http://127.0.0.1:7777/new-url
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;
pub mod telemetry;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AuthService, RegistrationService, ResolutionService};
    pub use crate::domain::entities::{AuthToken, MappingCandidate, UrlMapping};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
