//! # signup-form
//!
//! Validation and submission core for a multi-field registration form.
//!
//! ## Quick Start
//!
//! ```rust
//! use signup_form::{Field, Handoff, SubmissionGate, SubmitOutcome, SummaryView};
//!
//! let mut gate = SubmissionGate::new(Handoff::new());
//! gate.on_field_change(Field::Email, "a@b");
//! assert!(gate.errors().contains(Field::Email));
//! assert_eq!(gate.on_submit(), SubmitOutcome::Blocked);
//!
//! let view = SummaryView::from_handoff(gate.navigator_mut().take());
//! assert_eq!(view.heading(), "No data submitted.");
//! ```
//!
//! ## Architecture
//!
//! - **`validator`** - pure `validate()` producing an [`ErrorMap`]
//! - **`gate`** - [`SubmissionGate`], one per form session
//! - **`catalog`** - [`LocationCatalog`] for the country/city selects
//! - **`summary`** - [`Handoff`] and the post-submit [`SummaryView`]
//! - **`config`** - [`FormConfig`] from `signup.toml`
//!
//! Field format checks and password scoring come from `signup-validation`,
//! re-exported here as [`validation`].

pub mod catalog;
pub mod config;
pub mod error;
pub mod field;
pub mod gate;
pub mod summary;
pub mod validator;
pub mod values;

pub use signup_validation as validation;
pub use signup_validation::{score_password, PasswordAssessment, PasswordChecks, PasswordRule, Strength};

pub use catalog::LocationCatalog;
pub use config::FormConfig;
pub use error::FormError;
pub use field::{Field, FieldAttrs, FieldDescriptor, FIELD_DESCRIPTORS, SHOW_PASSWORD};
pub use gate::{Navigator, SubmissionGate, SubmitOutcome};
pub use summary::{Handoff, SummaryRow, SummaryView};
pub use validator::{validate, ErrorMap};
pub use values::{FormValues, SubmissionResult};
