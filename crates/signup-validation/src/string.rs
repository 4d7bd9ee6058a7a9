//! Presence checks

/// True when the value is empty or only whitespace.
///
/// Used for the text inputs, where a value of spaces counts as missing.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Required check for trimmed text inputs
pub fn validate_required(s: &str, message: &str) -> Result<(), String> {
    if is_blank(s) {
        Err(message.to_string())
    } else {
        Ok(())
    }
}

/// Required check for selects and the password input.
///
/// No trimming: a password of spaces is still a typed password.
pub fn validate_selected(s: &str, message: &str) -> Result<(), String> {
    if s.is_empty() {
        Err(message.to_string())
    } else {
        Ok(())
    }
}
