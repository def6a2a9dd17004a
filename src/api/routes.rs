//! API route configuration.

use crate::api::handlers::new_url_handler;
use crate::api::middleware::auth;
use crate::state::AppState;
use axum::{Router, middleware, routing::post};

/// Registration routes, behind the optional token gate.
///
/// # Endpoints
///
/// - `POST /new-url` - Register a destination and receive its slug
pub fn registration_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/new-url", post(new_url_handler))
        .route_layer(middleware::from_fn_with_state(state, auth::layer))
}
