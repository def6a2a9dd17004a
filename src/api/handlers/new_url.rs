//! Handler for the registration endpoint.

use axum::{Json, body::Bytes, extract::State, http::HeaderMap};

use crate::api::dto::new_url::{NewUrlRequest, NewUrlResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::content_negotiation::{require_json_accept, require_json_content_type};

/// Registers a destination and returns its short slug.
///
/// # Endpoint
///
/// `POST /new-url`
///
/// # Headers
///
/// - `Content-Type: application/json` (required)
/// - `Accept: application/json` (required)
/// - `Authorization: <token>` (only when the token gate is enabled)
///
/// # Request Body
///
/// ```json
/// { "long_url": "example.com/page", "protocol": "https" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "short_url": "stubhost.com/Ab3_x-9QzKw",
///   "id": 1,
///   "short_slug": "Ab3_x-9QzKw",
///   "long_url": "example.com/page",
///   "protocol": "https"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for content negotiation failures, an undecodable
/// body, or an invalid destination/protocol.
/// Returns 500 if the slug cannot be generated or stored.
pub async fn new_url_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<NewUrlResponse>, AppError> {
    require_json_content_type(&headers)?;
    require_json_accept(&headers)?;

    let request: NewUrlRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::MalformedRequestBody(e.to_string()))?;

    let mapping = state.registration_service.register(request.into()).await?;

    Ok(Json(NewUrlResponse::new(mapping, &state.public_host)))
}
