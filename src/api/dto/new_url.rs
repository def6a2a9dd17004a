//! DTOs for the registration endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{MappingCandidate, UrlMapping};

/// Request body of `POST /new-url`.
///
/// Unknown fields are ignored.
#[derive(Debug, Deserialize)]
pub struct NewUrlRequest {
    /// Destination to shorten, with or without an `https://` prefix.
    pub long_url: String,

    /// Optional scheme; empty or absent means `https`.
    #[serde(default)]
    pub protocol: Option<String>,
}

impl From<NewUrlRequest> for MappingCandidate {
    fn from(request: NewUrlRequest) -> Self {
        MappingCandidate {
            destination: request.long_url,
            scheme: request.protocol,
        }
    }
}

/// Response body of `POST /new-url`.
#[derive(Debug, Serialize)]
pub struct NewUrlResponse {
    /// `<public host>/<short_slug>`, for display.
    pub short_url: String,
    pub id: i64,
    pub short_slug: String,
    pub long_url: String,
    pub protocol: String,
}

impl NewUrlResponse {
    pub fn new(mapping: UrlMapping, public_host: &str) -> Self {
        Self {
            short_url: format!("{}/{}", public_host, mapping.slug),
            id: mapping.id,
            short_slug: mapping.slug,
            long_url: mapping.destination,
            protocol: mapping.scheme,
        }
    }
}
