// File: src/error.rs
// Purpose: Errors for API misuse (validation failures live in ErrorMap, not here)

/// Errors raised by the form session API
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Unknown form field: {0}")]
    UnknownField(String),

    #[error("Invalid value for showPassword: {0:?}")]
    InvalidToggle(String),

    #[error("Location catalog must contain at least one country")]
    EmptyCatalog,

    #[error("Location catalog contains a country with an empty name")]
    BlankCountry,

    #[error("Duplicate country in location catalog: {0}")]
    DuplicateCountry(String),
}
