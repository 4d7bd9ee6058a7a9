// File: src/values.rs
// Purpose: Current form values and the snapshot handed off on submit

use serde::{Deserialize, Serialize};

use crate::field::Field;

/// Values of every form input, as typed
///
/// `show_password` is display state only. It is never validated and never
/// leaves the session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormValues {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub country: String,
    pub city: String,
    pub pan: String,
    pub aadhar: String,
    pub show_password: bool,
}

impl FormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::Phone => &self.phone,
            Field::Country => &self.country,
            Field::City => &self.city,
            Field::Pan => &self.pan,
            Field::Aadhar => &self.aadhar,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Username => &mut self.username,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::Phone => &mut self.phone,
            Field::Country => &mut self.country,
            Field::City => &mut self.city,
            Field::Pan => &mut self.pan,
            Field::Aadhar => &mut self.aadhar,
        }
    }
}

/// Snapshot of the ten data fields taken at a successful submit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResult {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub country: String,
    pub city: String,
    pub pan: String,
    pub aadhar: String,
}

impl SubmissionResult {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::Phone => &self.phone,
            Field::Country => &self.country,
            Field::City => &self.city,
            Field::Pan => &self.pan,
            Field::Aadhar => &self.aadhar,
        }
    }

    /// Fields with their submitted values, in declaration order
    pub fn entries(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL.into_iter().map(move |field| (field, self.get(field)))
    }
}

impl From<&FormValues> for SubmissionResult {
    fn from(values: &FormValues) -> Self {
        Self {
            first_name: values.first_name.clone(),
            last_name: values.last_name.clone(),
            username: values.username.clone(),
            email: values.email.clone(),
            password: values.password.clone(),
            phone: values.phone.clone(),
            country: values.country.clone(),
            city: values.city.clone(),
            pan: values.pan.clone(),
            aadhar: values.aadhar.clone(),
        }
    }
}
