// File: src/gate.rs
// Purpose: Per-session form state, live revalidation and the submit decision

use signup_validation::{score_password, PasswordAssessment};
use tracing::{debug, info};

use crate::catalog::LocationCatalog;
use crate::config::{FormConfig, FormSection};
use crate::error::FormError;
use crate::field::{Field, SHOW_PASSWORD};
use crate::validator::{validate, ErrorMap};
use crate::values::{FormValues, SubmissionResult};

/// Receives the submitted values and moves the user to the summary view
pub trait Navigator {
    fn navigate(&mut self, result: SubmissionResult);
}

impl<F> Navigator for F
where
    F: FnMut(SubmissionResult),
{
    fn navigate(&mut self, result: SubmissionResult) {
        (self)(result)
    }
}

/// What a submit attempt did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Values were handed to the navigator
    HandedOff,
    /// The form had errors; nothing happened
    Blocked,
}

/// Stateful orchestrator for one form session
///
/// Every mutation recomputes the password assessment (when the password
/// changed), the error map and the aggregate validity before returning, so
/// the accessors always describe the current values.
#[derive(Debug)]
pub struct SubmissionGate<N> {
    values: FormValues,
    errors: ErrorMap,
    password: PasswordAssessment,
    catalog: LocationCatalog,
    labels: FormSection,
    navigator: N,
}

impl<N: Navigator> SubmissionGate<N> {
    /// New session with the built-in location catalog
    pub fn new(navigator: N) -> Self {
        Self::with_catalog(LocationCatalog::builtin(), navigator)
    }

    pub fn with_catalog(catalog: LocationCatalog, navigator: N) -> Self {
        Self::build(catalog, FormSection::default(), navigator)
    }

    /// New session using the catalog and captions from a config
    pub fn from_config(config: &FormConfig, navigator: N) -> Result<Self, FormError> {
        let catalog = config.catalog()?;
        Ok(Self::build(catalog, config.form.clone(), navigator))
    }

    fn build(catalog: LocationCatalog, labels: FormSection, navigator: N) -> Self {
        let mut gate = Self {
            values: FormValues::default(),
            errors: ErrorMap::new(),
            password: PasswordAssessment::empty(),
            catalog,
            labels,
            navigator,
        };
        gate.revalidate();
        gate
    }

    /// Update one field and recompute everything that depends on it
    ///
    /// Changing the country clears a selected city that the new country
    /// does not offer.
    pub fn on_field_change(&mut self, field: Field, value: impl Into<String>) -> &ErrorMap {
        self.values.set(field, value);
        debug!("Field changed: {}", field);

        match field {
            Field::Password => self.password = score_password(&self.values.password),
            Field::Country => self.clear_foreign_city(),
            _ => {}
        }

        self.revalidate();
        &self.errors
    }

    /// Show or hide the password. No validation effect.
    pub fn set_show_password(&mut self, show: bool) {
        self.values.show_password = show;
    }

    pub fn toggle_show_password(&mut self) {
        self.values.show_password = !self.values.show_password;
    }

    /// String-keyed change event, as raised by a rendering layer
    ///
    /// `showPassword` takes `true`/`on`/`1` or `false`/`off`/`0`/empty.
    pub fn apply(&mut self, name: &str, value: &str) -> Result<(), FormError> {
        if name == SHOW_PASSWORD {
            self.set_show_password(parse_toggle(value)?);
            return Ok(());
        }

        let field: Field = name.parse()?;
        self.on_field_change(field, value);
        Ok(())
    }

    /// Hand the current values to the navigator if the form is valid
    pub fn on_submit(&mut self) -> SubmitOutcome {
        if !self.is_form_valid() {
            debug!("Submit blocked: {} field(s) invalid", self.errors.len());
            return SubmitOutcome::Blocked;
        }

        let result = SubmissionResult::from(&self.values);
        info!("Form submitted, handing off to navigator");
        self.navigator.navigate(result);
        SubmitOutcome::HandedOff
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn password_strength(&self) -> &PasswordAssessment {
        &self.password
    }

    pub fn is_form_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn catalog(&self) -> &LocationCatalog {
        &self.catalog
    }

    pub fn countries(&self) -> Vec<&str> {
        self.catalog.countries()
    }

    /// Cities offered for the currently selected country
    pub fn cities(&self) -> &[String] {
        self.catalog.cities_for(&self.values.country)
    }

    /// The city select stays disabled until a country is chosen
    pub fn city_enabled(&self) -> bool {
        !self.values.country.is_empty()
    }

    /// The strength meter is only shown once something has been typed
    pub fn show_strength_meter(&self) -> bool {
        !self.values.password.is_empty()
    }

    pub fn submit_label(&self) -> &str {
        if self.is_form_valid() {
            &self.labels.submit_label
        } else {
            &self.labels.incomplete_label
        }
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut N {
        &mut self.navigator
    }

    pub fn into_navigator(self) -> N {
        self.navigator
    }

    fn clear_foreign_city(&mut self) {
        let city = &self.values.city;
        if !city.is_empty() && !self.catalog.contains_city(&self.values.country, city) {
            debug!("Clearing city not offered for the selected country");
            self.values.city.clear();
        }
    }

    fn revalidate(&mut self) {
        self.errors = validate(&self.values, &self.password, &self.catalog);
    }
}

fn parse_toggle(value: &str) -> Result<bool, FormError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "1" => Ok(true),
        "false" | "off" | "0" | "" => Ok(false),
        _ => Err(FormError::InvalidToggle(value.to_string())),
    }
}
