//! Phone number validation

use once_cell::sync::Lazy;
use regex::Regex;

// Optional '+', 1-4 digit country code, optional space or dash, 6-10 digit subscriber number
static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9]{1,4}[\s-]?[0-9]{6,10}$").unwrap());

/// Validates phone number format
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_phones() {
        assert!(is_valid_phone("9876543210"));
        assert!(is_valid_phone("+91 9876543210"));
        assert!(is_valid_phone("+1-5551234567"));
        assert!(is_valid_phone("44123456"));
        assert!(is_valid_phone("+9991234567890"));
    }

    #[test]
    fn test_invalid_phones() {
        assert!(!is_valid_phone(""));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("phone"));
        assert!(!is_valid_phone("+91  9876543210"));
        assert!(!is_valid_phone("++919876543210"));
        assert!(!is_valid_phone("+12345 12345678901"));
        assert!(!is_valid_phone("98765 43210"));
    }
}
