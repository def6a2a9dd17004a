//! Auth token entity used by the optional registration gate.

/// An opaque credential stored verbatim in `auth_tokens`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthToken {
    pub id: i64,
    pub token: String,
}
