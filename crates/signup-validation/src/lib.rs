//! Signup Validation Core
//!
//! Pure validation functions for the registration form: regex-backed format
//! checks for contact and identity fields, and the password strength scorer.
//! Shared by the form session and the browser bindings.

pub mod email;
pub mod identity;
pub mod password;
pub mod phone;
pub mod string;

// Re-export all validators
pub use email::*;
pub use identity::*;
pub use password::*;
pub use phone::*;
pub use string::*;
