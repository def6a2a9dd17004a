//! Core domain entities.
//!
//! - [`UrlMapping`] - A slug and the destination it redirects to
//! - [`AuthToken`] - A stored credential for the registration gate
//!
//! Creation input uses a separate `New*` struct, the stored form carries the
//! store-assigned id.

pub mod auth_token;
pub mod url_mapping;

pub use auth_token::AuthToken;
pub use url_mapping::{
    DEFAULT_SCHEME, MAX_DESTINATION_LEN, MappingCandidate, NewUrlMapping, UrlMapping,
};
