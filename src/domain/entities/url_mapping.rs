//! Url mapping entity representing a stored slug → destination pair.

/// The only transport scheme the service redirects to.
pub const DEFAULT_SCHEME: &str = "https";

/// Upper bound on the stored destination length, in characters.
pub const MAX_DESTINATION_LEN: usize = 255;

/// A persisted mapping from a short slug to its destination.
///
/// `destination` never carries a scheme prefix; resolution re-attaches
/// `scheme` when building the redirect target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapping {
    pub id: i64,
    pub slug: String,
    pub destination: String,
    pub scheme: String,
}

impl UrlMapping {
    /// Creates a new UrlMapping instance.
    pub fn new(id: i64, slug: String, destination: String, scheme: String) -> Self {
        Self {
            id,
            slug,
            destination,
            scheme,
        }
    }

    /// Absolute redirect target: `scheme + "://" + destination`.
    ///
    /// Plain string assembly. The destination is not re-validated or re-encoded.
    pub fn absolute_url(&self) -> String {
        let mut url = String::with_capacity(self.scheme.len() + 3 + self.destination.len());
        url.push_str(&self.scheme);
        url.push_str("://");
        url.push_str(&self.destination);
        url
    }
}

/// Input data for inserting a new mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlMapping {
    pub slug: String,
    pub destination: String,
    pub scheme: String,
}

impl NewUrlMapping {
    /// Attaches the store-assigned id.
    pub fn into_mapping(self, id: i64) -> UrlMapping {
        UrlMapping::new(id, self.slug, self.destination, self.scheme)
    }
}

/// A registration submission before validation.
///
/// `scheme` is `None` or empty when the caller did not pick one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingCandidate {
    pub destination: String,
    pub scheme: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_url_is_literal_concatenation() {
        let mapping = UrlMapping::new(
            1,
            "AAAAAAAAAAA".to_string(),
            "example.com/page?q=a b".to_string(),
            DEFAULT_SCHEME.to_string(),
        );

        assert_eq!(mapping.absolute_url(), "https://example.com/page?q=a b");
    }

    #[test]
    fn test_new_mapping_into_mapping() {
        let new_mapping = NewUrlMapping {
            slug: "xyz789xyz78".to_string(),
            destination: "rust-lang.org".to_string(),
            scheme: "https".to_string(),
        };

        let mapping = new_mapping.into_mapping(42);

        assert_eq!(mapping.id, 42);
        assert_eq!(mapping.slug, "xyz789xyz78");
        assert_eq!(mapping.destination, "rust-lang.org");
        assert_eq!(mapping.scheme, "https");
    }
}
