//! JSON content negotiation checks for request headers.

use crate::error::AppError;
use axum::http::{HeaderMap, header};

const APPLICATION_JSON: &str = "application/json";

/// Returns the media type of a header value without parameters.
fn essence(value: &str) -> &str {
    value.split(';').next().unwrap_or(value).trim()
}

/// Requires `Content-Type: application/json`.
///
/// The media type is compared case-insensitively; parameters such as
/// `charset=utf-8` are ignored.
///
/// # Errors
///
/// Returns [`AppError::MissingContentType`] if the header is absent, not valid
/// UTF-8, or names another media type.
pub fn require_json_content_type(headers: &HeaderMap) -> Result<(), AppError> {
    let is_json = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| essence(v).eq_ignore_ascii_case(APPLICATION_JSON));

    if is_json {
        Ok(())
    } else {
        Err(AppError::MissingContentType)
    }
}

/// Requires an `Accept` header that lists `application/json`.
///
/// Every `Accept` header is inspected, and each comma-separated entry in it.
/// Wildcards do not count.
///
/// # Errors
///
/// Returns [`AppError::MissingAcceptHeader`] if no entry names `application/json`.
pub fn require_json_accept(headers: &HeaderMap) -> Result<(), AppError> {
    let accepts_json = headers
        .get_all(header::ACCEPT)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .any(|entry| essence(entry).eq_ignore_ascii_case(APPLICATION_JSON));

    if accepts_json {
        Ok(())
    } else {
        Err(AppError::MissingAcceptHeader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_content_type_exact() {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
        assert!(require_json_content_type(&headers).is_ok());
    }

    #[test]
    fn test_content_type_case_and_charset() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("Application/JSON; charset=utf-8"),
        );
        assert!(require_json_content_type(&headers).is_ok());
    }

    #[test]
    fn test_content_type_missing() {
        let headers = HeaderMap::new();
        assert!(matches!(
            require_json_content_type(&headers),
            Err(AppError::MissingContentType)
        ));
    }

    #[test]
    fn test_content_type_other() {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        assert!(require_json_content_type(&headers).is_err());
    }

    #[test]
    fn test_accept_single() {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        assert!(require_json_accept(&headers).is_ok());
    }

    #[test]
    fn test_accept_list_with_quality() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static("text/html, application/json;q=0.9"),
        );
        assert!(require_json_accept(&headers).is_ok());
    }

    #[test]
    fn test_accept_repeated_headers() {
        let mut headers = HeaderMap::new();
        headers.append(header::ACCEPT, HeaderValue::from_static("text/html"));
        headers.append(header::ACCEPT, HeaderValue::from_static("application/json"));
        assert!(require_json_accept(&headers).is_ok());
    }

    #[test]
    fn test_accept_wildcard_rejected() {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("*/*"));
        assert!(matches!(
            require_json_accept(&headers),
            Err(AppError::MissingAcceptHeader)
        ));
    }

    #[test]
    fn test_accept_missing() {
        assert!(require_json_accept(&HeaderMap::new()).is_err());
    }
}
