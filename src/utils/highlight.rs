//! Terminal highlighting for the resolution and registration log messages.
//!
//! Colors are applied through `colored`; whether they render is decided once
//! at startup by [`set_enabled`].

use colored::Colorize;

/// Turns ANSI highlighting on or off for the whole process.
pub fn set_enabled(enabled: bool) {
    colored::control::set_override(enabled);
}

/// `RESOLVED slug(..) -> dest(..) FOR host(.., ..)`
pub fn resolved_message(slug: &str, destination: &str, client: &str, user_agent: &str) -> String {
    format!(
        "{} {}({}) {} {}({}) {} host({}, {})",
        "RESOLVED".green(),
        "slug".cyan(),
        slug,
        "->".cyan(),
        "dest".cyan(),
        destination.underline(),
        "FOR".green(),
        client,
        user_agent,
    )
}

/// `REGISTERED slug(..) -> dest(..)`
pub fn registered_message(slug: &str, destination: &str) -> String {
    format!(
        "{} {}({}) {} {}({})",
        "REGISTERED".green(),
        "slug".cyan(),
        slug,
        "->".cyan(),
        "dest".cyan(),
        destination.underline(),
    )
}

/// Underlines a value such as the listen address.
pub fn value(text: &str) -> String {
    text.underline().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_plain_messages_when_disabled() {
        set_enabled(false);

        assert_eq!(
            resolved_message("abc", "https://example.com", "127.0.0.1:1", "curl/8"),
            "RESOLVED slug(abc) -> dest(https://example.com) FOR host(127.0.0.1:1, curl/8)"
        );
        assert_eq!(
            registered_message("abc", "example.com"),
            "REGISTERED slug(abc) -> dest(example.com)"
        );
    }

    #[test]
    #[serial]
    fn test_ansi_codes_when_enabled() {
        set_enabled(true);
        let message = registered_message("abc", "example.com");
        set_enabled(false);

        assert!(message.contains("\u{1b}["));
        assert!(message.contains("abc"));
    }
}
