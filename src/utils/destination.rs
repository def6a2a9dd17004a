//! Destination validation for the registration workflow.
//!
//! Validation is deliberately permissive: bare hosts and host/path strings
//! such as `example.com/page` are accepted, because the stored destination
//! never carries a scheme and resolution re-attaches one.

use crate::domain::entities::{DEFAULT_SCHEME, MAX_DESTINATION_LEN};
use crate::error::AppError;
use std::sync::LazyLock;
use url::Url;

/// Base against which relative destinations are parsed.
static PARSE_BASE: LazyLock<Url> =
    LazyLock::new(|| Url::parse("https://destination.invalid/").expect("static base URL"));

/// Validates a submitted destination and returns the form to store.
///
/// # Rules
///
/// 1. At most [`MAX_DESTINATION_LEN`] characters
/// 2. Not empty
/// 3. A leading `https://` is stripped; any other explicit scheme is rejected
///    (dotted prefixes such as `example.com://` are hosts, not schemes)
/// 4. No control characters and no malformed percent escapes
/// 5. Must parse as a URL reference (relative references allowed)
///
/// # Errors
///
/// - [`AppError::DestinationTooLong`] when rule 1 fails
/// - [`AppError::UnsupportedScheme`] when the destination names a scheme other than `https`
/// - [`AppError::MalformedDestination`] for everything else
///
/// # Examples
///
/// ```ignore
/// assert_eq!(validate_destination("example.com/page")?, "example.com/page");
/// assert_eq!(validate_destination("HTTPS://example.com")?, "example.com");
/// assert!(validate_destination("ftp://example.com").is_err());
/// ```
pub fn validate_destination(input: &str) -> Result<String, AppError> {
    let length = input.chars().count();
    if length > MAX_DESTINATION_LEN {
        return Err(AppError::DestinationTooLong {
            length,
            max: MAX_DESTINATION_LEN,
        });
    }

    let destination = strip_scheme(input)?;

    if destination.is_empty() {
        return Err(AppError::MalformedDestination(
            "long_url must not be empty".to_string(),
        ));
    }

    if destination.chars().any(char::is_control) {
        return Err(AppError::MalformedDestination(
            "long_url contains control characters".to_string(),
        ));
    }

    check_percent_escapes(destination)?;

    Url::options()
        .base_url(Some(&PARSE_BASE))
        .parse(destination)
        .map_err(|e| AppError::MalformedDestination(e.to_string()))?;

    Ok(destination.to_string())
}

/// Strips a leading `https://`, rejecting any other explicit scheme.
fn strip_scheme(input: &str) -> Result<&str, AppError> {
    let Some(pos) = input.find("://") else {
        return Ok(input);
    };

    let scheme = &input[..pos];
    if !is_scheme(scheme) {
        return Ok(input);
    }

    if scheme.eq_ignore_ascii_case(DEFAULT_SCHEME) {
        Ok(&input[pos + 3..])
    } else {
        Err(AppError::UnsupportedScheme(scheme.to_string()))
    }
}

/// A letter followed by letters, digits, `+` or `-`.
///
/// RFC 3986 also allows `.`, but dotted text such as `example.com://x` is
/// treated as a host here.
fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-'))
        }
        _ => false,
    }
}

fn check_percent_escapes(destination: &str) -> Result<(), AppError> {
    let bytes = destination.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes.len() > i + 2
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();

            if !valid {
                let end = (i + 3).min(bytes.len());
                return Err(AppError::MalformedDestination(format!(
                    "invalid URL escape {:?}",
                    String::from_utf8_lossy(&bytes[i..end])
                )));
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_bare_host_and_path() {
        assert_eq!(
            validate_destination("example.com/page").unwrap(),
            "example.com/page"
        );
    }

    #[test]
    fn test_accepts_query_and_fragment() {
        assert_eq!(
            validate_destination("example.com/search?q=rust#top").unwrap(),
            "example.com/search?q=rust#top"
        );
    }

    #[test]
    fn test_accepts_host_with_port() {
        assert_eq!(
            validate_destination("localhost:8080/admin").unwrap(),
            "localhost:8080/admin"
        );
    }

    #[test]
    fn test_accepts_valid_percent_escapes() {
        assert_eq!(
            validate_destination("example.com/a%20b").unwrap(),
            "example.com/a%20b"
        );
    }

    #[test]
    fn test_strips_https_prefix() {
        assert_eq!(
            validate_destination("https://example.com/page").unwrap(),
            "example.com/page"
        );
        assert_eq!(
            validate_destination("HTTPS://example.com").unwrap(),
            "example.com"
        );
    }

    #[test]
    fn test_rejects_other_schemes() {
        let err = validate_destination("ftp://example.com/file").unwrap_err();
        assert!(matches!(err, AppError::UnsupportedScheme(ref s) if s == "ftp"));

        let err = validate_destination("http://example.com").unwrap_err();
        assert!(matches!(err, AppError::UnsupportedScheme(_)));
    }

    #[test]
    fn test_scheme_like_text_in_query_is_not_a_scheme() {
        assert_eq!(
            validate_destination("example.com/?next=http://other.com").unwrap(),
            "example.com/?next=http://other.com"
        );
    }

    #[test]
    fn test_dotted_prefix_is_a_host_not_a_scheme() {
        assert_eq!(
            validate_destination("example.com://x").unwrap(),
            "example.com://x"
        );

        let err = validate_destination("svn+ssh://example.com").unwrap_err();
        assert!(matches!(err, AppError::UnsupportedScheme(ref s) if s == "svn+ssh"));
    }

    #[test]
    fn test_length_limit_is_inclusive() {
        let at_limit = format!("example.com/{}", "a".repeat(MAX_DESTINATION_LEN - 12));
        assert_eq!(at_limit.len(), MAX_DESTINATION_LEN);
        assert!(validate_destination(&at_limit).is_ok());

        let over = format!("{at_limit}a");
        let err = validate_destination(&over).unwrap_err();
        assert!(matches!(
            err,
            AppError::DestinationTooLong {
                length: 256,
                max: 255
            }
        ));
    }

    #[test]
    fn test_length_counts_characters() {
        let destination = format!("example.com/{}", "é".repeat(200));
        assert!(destination.len() > MAX_DESTINATION_LEN);
        assert!(validate_destination(&destination).is_ok());
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(
            validate_destination("").unwrap_err(),
            AppError::MalformedDestination(_)
        ));
        assert!(matches!(
            validate_destination("https://").unwrap_err(),
            AppError::MalformedDestination(_)
        ));
    }

    #[test]
    fn test_rejects_control_characters() {
        assert!(matches!(
            validate_destination("example.com/\npage").unwrap_err(),
            AppError::MalformedDestination(_)
        ));
        assert!(matches!(
            validate_destination("example.com/\u{7f}").unwrap_err(),
            AppError::MalformedDestination(_)
        ));
    }

    #[test]
    fn test_rejects_bad_percent_escapes() {
        for input in ["example.com/%zz", "example.com/%4", "example.com/%"] {
            let err = validate_destination(input).unwrap_err();
            assert!(
                matches!(err, AppError::MalformedDestination(_)),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_unparseable_host() {
        let err = validate_destination("//[::1").unwrap_err();
        assert!(matches!(err, AppError::MalformedDestination(_)));
    }
}
