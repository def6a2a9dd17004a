//! Handler for short URL redirect.

use axum::{
    extract::{ConnectInfo, Path, State, rejection::PathRejection},
    http::{HeaderMap, HeaderValue, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use std::net::SocketAddr;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::highlight;

/// Redirects a slug to its destination.
///
/// # Endpoint
///
/// `GET /{slug}`
///
/// # Response
///
/// `301 Moved Permanently` with `Location: <scheme>://<destination>` and an
/// empty body. Each resolution is logged with the caller address and agent.
///
/// # Errors
///
/// Returns 404 Not Found if the slug doesn't exist, including slugs that
/// do not decode to UTF-8.
/// Returns 500 on storage failures.
pub async fn redirect_handler(
    slug: Result<Path<String>, PathRejection>,
    uri: Uri,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<Response, AppError> {
    let slug = match slug {
        Ok(Path(slug)) => slug,
        Err(PathRejection::FailedToDeserializePathParams(e)) => {
            tracing::debug!(error = %e, "Undecodable slug");
            return Err(AppError::UnknownSlug(
                uri.path().trim_start_matches('/').to_string(),
            ));
        }
        Err(e) => return Err(AppError::Internal(e.body_text())),
    };

    let location = state.resolution_service.resolve(&slug).await?;

    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    let client = addr.to_string();

    tracing::info!(
        slug = %slug,
        destination = %location,
        client = %client,
        user_agent,
        "{}",
        highlight::resolved_message(&slug, &location, &client, user_agent)
    );

    let location = HeaderValue::from_bytes(location.as_bytes())
        .map_err(|e| AppError::Internal(format!("unusable redirect target: {e}")))?;

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response())
}
