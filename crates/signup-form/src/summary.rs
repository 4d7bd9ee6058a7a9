// File: src/summary.rs
// Purpose: In-memory hand-off of a submission and the read-only summary view

use serde::Serialize;

use crate::field::Field;
use crate::gate::Navigator;
use crate::values::SubmissionResult;

pub const SUMMARY_HEADING: &str = "Submission Successful!";
pub const SUMMARY_INTRO: &str = "Here's what we received from you:";
pub const NO_DATA_MESSAGE: &str = "No data submitted.";

/// Single-slot hand-off between the form and the summary view
///
/// Holds at most one submission; a later submit replaces an untaken one.
#[derive(Debug, Default)]
pub struct Handoff {
    slot: Option<SubmissionResult>,
}

impl Handoff {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.slot.is_some()
    }

    /// Move the submission out, leaving the slot empty
    pub fn take(&mut self) -> Option<SubmissionResult> {
        self.slot.take()
    }
}

impl Navigator for Handoff {
    fn navigate(&mut self, result: SubmissionResult) {
        self.slot = Some(result);
    }
}

/// One labelled value in the summary list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub label: String,
    pub value: String,
}

/// What the results page shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "rows", rename_all = "camelCase")]
pub enum SummaryView {
    /// Reached without a submission
    Empty,
    Submitted(Vec<SummaryRow>),
}

impl SummaryView {
    pub fn from_handoff(result: Option<SubmissionResult>) -> Self {
        match result {
            None => SummaryView::Empty,
            Some(result) => SummaryView::Submitted(
                result
                    .entries()
                    .map(|(field, value)| SummaryRow {
                        label: summary_label(field),
                        value: value.to_string(),
                    })
                    .collect(),
            ),
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            SummaryView::Empty => NO_DATA_MESSAGE,
            SummaryView::Submitted(_) => SUMMARY_HEADING,
        }
    }

    /// Line under the heading, only when there is something to list
    pub fn intro(&self) -> Option<&'static str> {
        match self {
            SummaryView::Empty => None,
            SummaryView::Submitted(_) => Some(SUMMARY_INTRO),
        }
    }

    pub fn rows(&self) -> &[SummaryRow] {
        match self {
            SummaryView::Empty => &[],
            SummaryView::Submitted(rows) => rows.as_slice(),
        }
    }
}

/// "firstName" -> "First Name", "pan" -> "Pan"
pub fn summary_label(field: Field) -> String {
    let mut label = String::new();
    for (i, c) in field.as_str().chars().enumerate() {
        if i == 0 {
            label.extend(c.to_uppercase());
        } else if c.is_ascii_uppercase() {
            label.push(' ');
            label.push(c);
        } else {
            label.push(c);
        }
    }
    label
}
