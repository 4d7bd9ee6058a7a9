// File: src/validator.rs
// Purpose: Whole-form validation producing one message per failing field

use std::collections::BTreeMap;

use serde::Serialize;
use signup_validation::{
    is_valid_aadhar, is_valid_email, is_valid_pan, is_valid_phone, validate_required,
    validate_selected, PasswordAssessment,
};

use crate::catalog::LocationCatalog;
use crate::field::Field;
use crate::values::FormValues;

/// Messages shown under each field
pub mod messages {
    pub const FIRST_NAME_REQUIRED: &str = "First name is required.";
    pub const LAST_NAME_REQUIRED: &str = "Last name is required.";
    pub const USERNAME_REQUIRED: &str = "Username is required.";
    pub const EMAIL_REQUIRED: &str = "Email is required.";
    pub const EMAIL_INVALID: &str = "Invalid email format.";
    pub const PASSWORD_REQUIRED: &str = "Password is required.";
    pub const PASSWORD_WEAK: &str =
        "Password needs at least 3 of: 8+ chars, lowercase, uppercase, number, special character.";
    pub const PHONE_REQUIRED: &str = "Phone number is required.";
    pub const PHONE_INVALID: &str = "Invalid phone format.";
    pub const COUNTRY_REQUIRED: &str = "Country is required.";
    pub const COUNTRY_INVALID: &str = "Please select a valid country.";
    pub const CITY_REQUIRED: &str = "City is required.";
    pub const CITY_INVALID: &str = "Please select a city in the chosen country.";
    pub const PAN_REQUIRED: &str = "PAN number is required.";
    pub const PAN_INVALID: &str = "Invalid PAN number.";
    pub const AADHAR_REQUIRED: &str = "Aadhar number is required.";
    pub const AADHAR_INVALID: &str = "Invalid Aadhar number.";
}

use messages::*;

/// Field name to error message. A field without an entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorMap(BTreeMap<Field, String>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the message for a field, replacing any earlier one
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(|s| s.as_str())
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Failing fields with their messages, in field order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

/// Validate every field of the form
///
/// Pure: the result depends only on the arguments. Each field is checked
/// independently and gets at most one message; a missing value reports the
/// required message and skips the format check.
pub fn validate(
    values: &FormValues,
    password: &PasswordAssessment,
    catalog: &LocationCatalog,
) -> ErrorMap {
    let mut errors = ErrorMap::new();

    for field in Field::ALL {
        if let Err(message) = validate_field(field, values, password, catalog) {
            errors.insert(field, message);
        }
    }

    errors
}

fn validate_field(
    field: Field,
    values: &FormValues,
    password: &PasswordAssessment,
    catalog: &LocationCatalog,
) -> Result<(), String> {
    let value = values.get(field);

    match field {
        Field::FirstName => validate_required(value, FIRST_NAME_REQUIRED),
        Field::LastName => validate_required(value, LAST_NAME_REQUIRED),
        Field::Username => validate_required(value, USERNAME_REQUIRED),
        Field::Email => {
            validate_required(value, EMAIL_REQUIRED)?;
            check(is_valid_email(value), EMAIL_INVALID)
        }
        Field::Password => {
            validate_selected(value, PASSWORD_REQUIRED)?;
            check(password.is_valid, PASSWORD_WEAK)
        }
        Field::Phone => {
            validate_required(value, PHONE_REQUIRED)?;
            check(is_valid_phone(value), PHONE_INVALID)
        }
        Field::Country => {
            validate_selected(value, COUNTRY_REQUIRED)?;
            check(catalog.contains_country(value), COUNTRY_INVALID)
        }
        Field::City => {
            validate_selected(value, CITY_REQUIRED)?;
            check(catalog.contains_city(&values.country, value), CITY_INVALID)
        }
        Field::Pan => {
            validate_required(value, PAN_REQUIRED)?;
            check(is_valid_pan(value), PAN_INVALID)
        }
        Field::Aadhar => {
            validate_required(value, AADHAR_REQUIRED)?;
            check(is_valid_aadhar(value), AADHAR_INVALID)
        }
    }
}

fn check(valid: bool, message: &str) -> Result<(), String> {
    valid.then_some(()).ok_or_else(|| message.to_string())
}
