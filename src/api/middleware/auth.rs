//! Token gate for the registration endpoint.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::{error::AppError, state::AppState};

/// Requires a stored token in the `Authorization` header.
///
/// A no-op when the gate is disabled in configuration. Runs before any
/// content negotiation or body handling.
///
/// # Header Format
///
/// ```text
/// Authorization: <token>
/// Authorization: Bearer <token>
/// ```
///
/// # Errors
///
/// Returns `401 Unauthorized` if the header is missing or matches no stored token.
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if let Some(auth_service) = &st.auth_service {
        let presented = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok());

        auth_service.authenticate(presented).await?;
    }

    Ok(next.run(req).await)
}
