//! Signup Form WASM
//!
//! WebAssembly bindings for the registration form session.
//! The page forwards every input event to a `FormSession` and re-renders
//! from the returned errors and password strength.

use std::collections::BTreeMap;

use serde::Serialize;
use signup_form::{
    score_password, Field, FormError, Handoff, PasswordAssessment, SubmissionGate,
    SubmissionResult, SubmitOutcome, SummaryView,
};
use wasm_bindgen::prelude::*;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(value)?)
}

fn form_error(e: FormError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Rendering metadata for one input, as handed to JavaScript
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FieldView {
    name: &'static str,
    label: &'static str,
    icon: &'static str,
    attrs: BTreeMap<String, String>,
}

fn field_views() -> Vec<FieldView> {
    Field::ALL
        .iter()
        .map(|field| {
            let descriptor = field.descriptor();
            FieldView {
                name: field.as_str(),
                label: descriptor.label,
                icon: descriptor.icon.as_str(),
                attrs: descriptor.attrs().html5_attrs,
            }
        })
        .collect()
}

/// One strength-meter indicator
#[derive(Serialize)]
struct RuleView {
    key: &'static str,
    label: &'static str,
    passed: bool,
}

fn rule_views(assessment: &PasswordAssessment) -> Vec<RuleView> {
    assessment
        .checks
        .iter()
        .map(|(rule, passed)| RuleView {
            key: rule.key(),
            label: rule.label(),
            passed,
        })
        .collect()
}

/// One registration form session
///
/// # Example (JavaScript)
/// ```javascript
/// const session = new FormSession();
/// session.onFieldChange('email', input.value);
/// render(session.errors(), session.passwordStrength());
///
/// const submitted = session.onSubmit();
/// if (submitted !== null) {
///     showSummary(summaryView(submitted));
/// }
/// ```
#[wasm_bindgen]
pub struct FormSession {
    gate: SubmissionGate<Handoff>,
}

#[wasm_bindgen]
impl FormSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> FormSession {
        FormSession {
            gate: SubmissionGate::new(Handoff::new()),
        }
    }

    /// Apply a change event; `name` is the input's name attribute
    #[wasm_bindgen(js_name = onFieldChange)]
    pub fn on_field_change(&mut self, name: &str, value: &str) -> Result<(), JsValue> {
        self.gate.apply(name, value).map_err(form_error)
    }

    /// Returns the submitted values, or `null` when the form has errors
    #[wasm_bindgen(js_name = onSubmit)]
    pub fn on_submit(&mut self) -> Result<JsValue, JsValue> {
        match self.gate.on_submit() {
            SubmitOutcome::Blocked => Ok(JsValue::NULL),
            SubmitOutcome::HandedOff => match self.gate.navigator_mut().take() {
                Some(result) => to_js(&result),
                None => Ok(JsValue::NULL),
            },
        }
    }

    /// Field name to message for every failing field
    pub fn errors(&self) -> Result<JsValue, JsValue> {
        to_js(self.gate.errors())
    }

    #[wasm_bindgen(js_name = passwordStrength)]
    pub fn password_strength(&self) -> Result<JsValue, JsValue> {
        to_js(self.gate.password_strength())
    }

    #[wasm_bindgen(js_name = isFormValid)]
    pub fn is_form_valid(&self) -> bool {
        self.gate.is_form_valid()
    }

    #[wasm_bindgen(js_name = showStrengthMeter)]
    pub fn show_strength_meter(&self) -> bool {
        self.gate.show_strength_meter()
    }

    #[wasm_bindgen(js_name = submitLabel)]
    pub fn submit_label(&self) -> String {
        self.gate.submit_label().to_string()
    }

    /// Strength-meter indicators for the current password, in display order
    #[wasm_bindgen(js_name = passwordRules)]
    pub fn password_rules(&self) -> Result<JsValue, JsValue> {
        to_js(&rule_views(self.gate.password_strength()))
    }

    /// Whether the city select should accept input yet
    #[wasm_bindgen(js_name = cityEnabled)]
    pub fn city_enabled(&self) -> bool {
        self.gate.city_enabled()
    }

    pub fn values(&self) -> Result<JsValue, JsValue> {
        to_js(self.gate.values())
    }

    pub fn countries(&self) -> Result<JsValue, JsValue> {
        to_js(&self.gate.countries())
    }

    /// Cities for any country; empty for unknown or empty selection
    #[wasm_bindgen(js_name = citiesFor)]
    pub fn cities_for(&self, country: &str) -> Result<JsValue, JsValue> {
        to_js(self.gate.catalog().cities_for(country))
    }
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Strength assessment for a password, outside any session
#[wasm_bindgen(js_name = scorePassword)]
pub fn score_password_js(password: &str) -> Result<JsValue, JsValue> {
    to_js(&score_password(password))
}

/// Label, icon and HTML attributes for every input, in form order
#[wasm_bindgen(js_name = fieldDescriptors)]
pub fn field_descriptors() -> Result<JsValue, JsValue> {
    to_js(&field_views())
}

/// Summary view for a hand-off; pass `null`/`undefined` when nothing was submitted
#[wasm_bindgen(js_name = summaryView)]
pub fn summary_view(submitted: JsValue) -> Result<JsValue, JsValue> {
    let result: Option<SubmissionResult> = if submitted.is_null() || submitted.is_undefined() {
        None
    } else {
        Some(serde_wasm_bindgen::from_value(submitted)?)
    };
    to_js(&SummaryView::from_handoff(result))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    fn fill(session: &mut FormSession) {
        for (name, value) in [
            ("firstName", "Asha"),
            ("lastName", "Rao"),
            ("username", "asharao"),
            ("email", "asha@example.com"),
            ("password", "Abcdef1!"),
            ("phone", "9876543210"),
            ("country", "India"),
            ("city", "Delhi"),
            ("pan", "ABCDE1234F"),
            ("aadhar", "123456789012"),
        ] {
            session.on_field_change(name, value).unwrap();
        }
    }

    #[wasm_bindgen_test]
    fn test_blocked_submit_returns_null() {
        let mut session = FormSession::new();
        assert!(!session.is_form_valid());
        assert!(session.on_submit().unwrap().is_null());
    }

    #[wasm_bindgen_test]
    fn test_valid_submit_returns_values() {
        let mut session = FormSession::new();
        fill(&mut session);
        session.on_field_change("showPassword", "true").unwrap();
        assert!(session.is_form_valid());
        assert_eq!(session.submit_label(), "Create Account");

        let submitted = session.on_submit().unwrap();
        assert!(submitted.is_object());
        let result: SubmissionResult = serde_wasm_bindgen::from_value(submitted).unwrap();
        assert_eq!(result.city, "Delhi");
    }

    #[wasm_bindgen_test]
    fn test_city_enabled_after_country() {
        let mut session = FormSession::new();
        assert!(!session.city_enabled());
        session.on_field_change("country", "USA").unwrap();
        assert!(session.city_enabled());
    }

    #[wasm_bindgen_test]
    fn test_unknown_field_is_an_error() {
        let mut session = FormSession::new();
        assert!(session.on_field_change("nickname", "x").is_err());
    }

    #[wasm_bindgen_test]
    fn test_summary_without_submission() {
        let view = summary_view(JsValue::NULL).unwrap();
        assert!(view.is_object());
    }
}
