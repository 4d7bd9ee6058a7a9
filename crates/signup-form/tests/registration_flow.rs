/// End-to-end registration flow through the public API
///
/// Drives a session the way a rendering layer would: string-keyed change
/// events in, error map and strength out, then submit into a hand-off that
/// the summary view consumes.

use pretty_assertions::assert_eq;
use rstest::rstest;
use signup_form::validator::messages;
use signup_form::{
    Field, FormConfig, Handoff, Strength, SubmissionGate, SubmitOutcome, SummaryView,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

fn filled_session() -> SubmissionGate<Handoff> {
    let mut gate = SubmissionGate::new(Handoff::new());
    for (name, value) in [
        ("firstName", "Asha"),
        ("lastName", "Rao"),
        ("username", "asharao"),
        ("email", "asha@example.com"),
        ("password", "Abcdef1!"),
        ("phone", "+91 9876543210"),
        ("country", "India"),
        ("city", "Mumbai"),
        ("pan", "ABCDE1234F"),
        ("aadhar", "123456789012"),
    ] {
        gate.apply(name, value).unwrap();
    }
    gate
}

#[test]
fn test_valid_submission_reaches_summary() {
    init_tracing();
    let mut gate = filled_session();
    gate.apply("showPassword", "true").unwrap();

    assert!(gate.errors().is_empty());
    assert!(gate.is_form_valid());
    assert_eq!(gate.password_strength().strength, Strength::VeryStrong);
    assert_eq!(gate.on_submit(), SubmitOutcome::HandedOff);

    let result = gate.navigator_mut().take().unwrap();
    let json = serde_json::to_value(&result).unwrap();
    let mut keys: Vec<&str> = json.as_object().unwrap().keys().map(|k| k.as_str()).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec![
            "aadhar", "city", "country", "email", "firstName", "lastName", "pan", "password",
            "phone", "username"
        ]
    );

    let view = SummaryView::from_handoff(Some(result));
    assert_eq!(view.heading(), "Submission Successful!");
    assert_eq!(view.rows().len(), 10);
}

#[test]
fn test_summary_without_submission_shows_placeholder() {
    let mut gate = SubmissionGate::new(Handoff::new());
    assert_eq!(gate.on_submit(), SubmitOutcome::Blocked);

    let view = SummaryView::from_handoff(gate.navigator_mut().take());
    assert_eq!(view, SummaryView::Empty);
    assert_eq!(view.heading(), "No data submitted.");
}

#[test]
fn test_validity_flag_tracks_error_map() {
    init_tracing();
    let mut gate = filled_session();
    assert_eq!(gate.is_form_valid(), gate.errors().is_empty());

    gate.apply("email", "a@b").unwrap();
    assert_eq!(gate.errors().get(Field::Email), Some(messages::EMAIL_INVALID));
    assert!(!gate.is_form_valid());
    assert_eq!(gate.on_submit(), SubmitOutcome::Blocked);
    assert!(!gate.navigator().is_pending());

    gate.apply("email", "a@b.com").unwrap();
    assert!(gate.is_form_valid());
    assert_eq!(gate.on_submit(), SubmitOutcome::HandedOff);
    assert!(gate.navigator().is_pending());
}

#[test]
fn test_switching_country_never_keeps_foreign_city() {
    let mut gate = filled_session();
    assert!(!gate.errors().contains(Field::City));

    gate.apply("country", "USA").unwrap();
    assert_eq!(gate.values().city, "");
    assert_eq!(gate.errors().get(Field::City), Some(messages::CITY_REQUIRED));
    assert_eq!(gate.on_submit(), SubmitOutcome::Blocked);

    gate.apply("city", "Chicago").unwrap();
    assert!(gate.is_form_valid());
}

#[test]
fn test_toggling_show_password_changes_nothing_else() {
    let mut gate = filled_session();
    gate.apply("pan", "abcde1234f").unwrap();
    let errors = gate.errors().clone();

    for value in ["true", "false", "on", "off"] {
        gate.apply("showPassword", value).unwrap();
        assert_eq!(gate.errors(), &errors);
        assert!(!gate.is_form_valid());
    }
}

#[rstest]
#[case("", Some(messages::PASSWORD_REQUIRED))]
#[case("abc", Some(messages::PASSWORD_WEAK))]
#[case("abcdefgh", Some(messages::PASSWORD_WEAK))]
#[case("Abcdefgh", None)]
#[case("Abcdef1!", None)]
fn test_password_error_matches_strength(#[case] password: &str, #[case] expected: Option<&str>) {
    let mut gate = filled_session();
    gate.apply("password", password).unwrap();
    assert_eq!(gate.errors().get(Field::Password), expected);
    assert_eq!(gate.password_strength().is_valid, expected.is_none());
}

#[test]
fn test_session_from_config_file() {
    let path = std::env::temp_dir().join(format!("signup-flow-{}.toml", std::process::id()));
    std::fs::write(
        &path,
        r#"
        [[locations]]
        country = "Canada"
        cities = ["Toronto", "Vancouver"]
        "#,
    )
    .unwrap();
    let config = FormConfig::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let mut gate = SubmissionGate::from_config(&config, Handoff::new()).unwrap();
    assert_eq!(gate.countries(), vec!["Canada"]);
    gate.apply("country", "Canada").unwrap();
    assert_eq!(gate.cities(), ["Toronto", "Vancouver"]);
}
