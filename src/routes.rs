//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{slug}`    - Redirect to the stored destination (public)
//! - `POST /new-url`   - Register a destination (token gate when enabled)
//! - `GET  /health`    - Database health check (public)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Token gate** - `Authorization` check on registration, when enabled

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;

/// Constructs the application router with all routes and middleware.
///
/// The redirect handler reads the peer address, so the router must be served
/// with `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/{slug}", get(redirect_handler))
        .route("/health", get(health_handler))
        .merge(api::routes::registration_routes(state.clone()))
        .with_state(state)
        .layer(tracing::layer())
}
