//! Indian identity document numbers (PAN and Aadhar)

use once_cell::sync::Lazy;
use regex::Regex;

static PAN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").unwrap());

static AADHAR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{12}$").unwrap());

/// Validates a PAN: five uppercase letters, four digits, one uppercase letter.
///
/// Case-sensitive, `abcde1234f` is rejected.
pub fn is_valid_pan(pan: &str) -> bool {
    PAN_REGEX.is_match(pan)
}

/// Validates an Aadhar number: exactly twelve digits, no separators.
pub fn is_valid_aadhar(aadhar: &str) -> bool {
    AADHAR_REGEX.is_match(aadhar)
}
