//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

// Local part: dot-separated atoms or one quoted string.
// Domain: bracketed IPv4 literal or dotted labels ending in a 2+ letter TLD.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .unwrap()
});

/// Validates email format
///
/// Accepts:
/// - `user@example.com`, `first.last@mail.example.co.uk`
/// - `"quoted local"@example.com`
/// - `user@[192.168.0.1]`
///
/// Rejects domains without a TLD (`a@b`) and single-letter TLDs.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a@b.com")]
    #[case("user@example.com")]
    #[case("first.last@mail.example.co.uk")]
    #[case("user+tag@example-domain.com")]
    #[case("\"john doe\"@example.com")]
    #[case("user@[192.168.0.1]")]
    fn test_valid_emails(#[case] email: &str) {
        assert!(is_valid_email(email), "expected valid: {email}");
    }

    #[rstest]
    #[case("")]
    #[case("a@b")]
    #[case("user@example.c")]
    #[case("@example.com")]
    #[case("user@")]
    #[case("user@@example.com")]
    #[case(".user@example.com")]
    #[case("user.@example.com")]
    #[case("us..er@example.com")]
    #[case("user name@example.com")]
    #[case("user@exa_mple.com")]
    #[case(" a@b.com")]
    fn test_invalid_emails(#[case] email: &str) {
        assert!(!is_valid_email(email), "expected invalid: {email}");
    }
}
