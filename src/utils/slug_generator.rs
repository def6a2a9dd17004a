//! Slug and token generation.
//!
//! Both draw from the operating system's secure random source, digest the
//! bytes with SHA-256 and encode the result as URL-safe base64 without padding.

use crate::error::AppError;
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use sha2::{Digest, Sha256};

/// Random bytes drawn per slug.
const SLUG_SOURCE_BYTES: usize = 16;

/// Digest prefix kept per slug. 8 bytes encode to 11 characters.
const SLUG_DIGEST_BYTES: usize = 8;

/// Random bytes drawn per token.
const TOKEN_SOURCE_BYTES: usize = 32;

/// Length of a generated slug.
pub const SLUG_LEN: usize = 11;

/// Length of a generated token (full 32-byte digest).
pub const TOKEN_LEN: usize = 43;

fn random_bytes<const N: usize>() -> Result<[u8; N], AppError> {
    let mut buffer = [0u8; N];
    getrandom::fill(&mut buffer)
        .map_err(|e| AppError::RandomSourceUnavailable(e.to_string()))?;
    Ok(buffer)
}

/// Generates an 11-character URL-safe slug.
///
/// The slug space is 2^64. No uniqueness check happens here; collisions are
/// reported by the store's uniqueness constraint.
///
/// # Errors
///
/// Returns [`AppError::RandomSourceUnavailable`] if the system random source
/// cannot supply bytes. There is no fallback to a weaker source.
///
/// # Examples
///
/// ```ignore
/// let slug = generate_slug()?;
/// assert_eq!(slug.len(), 11);
/// ```
pub fn generate_slug() -> Result<String, AppError> {
    let source = random_bytes::<SLUG_SOURCE_BYTES>()?;
    let digest = Sha256::digest(source);

    Ok(URL_SAFE_NO_PAD.encode(&digest[..SLUG_DIGEST_BYTES]))
}

/// Generates a 43-character opaque credential for the registration gate.
///
/// # Errors
///
/// Returns [`AppError::RandomSourceUnavailable`] if the system random source
/// cannot supply bytes.
pub fn generate_token() -> Result<String, AppError> {
    let source = random_bytes::<TOKEN_SOURCE_BYTES>()?;
    let digest = Sha256::digest(source);

    Ok(URL_SAFE_NO_PAD.encode(digest))
}
