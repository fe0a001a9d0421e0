//! Form state: values, errors and the outcome of the last submission

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Current value of each field, keyed by field id
pub type Values = HashMap<String, Value>;

/// Current error message of each field; an empty message means valid
pub type Errors = HashMap<String, String>;

/// Result of the most recent submit attempt
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitOutcome {
    /// No submission has completed yet
    #[default]
    Unset,
    Success,
    Failure,
}

/// True when any field carries a non-empty message
pub fn has_errors(errors: &Errors) -> bool {
    errors.values().any(|message| !message.is_empty())
}

/// Form-level banner shown under the submit button
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    Success,
    /// The submission itself failed; the fields were fine
    UnexpectedError,
    /// The last submission failed and fields now report errors
    Invalid,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::Success => "The form was successfully submitted.",
            Notice::UnexpectedError => "An unexpected error occurred.",
            Notice::Invalid => "The form is invalid. Please review, adjust, and try again.",
        }
    }

    pub fn is_error(&self) -> bool {
        !matches!(self, Notice::Success)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    pub values: Values,
    pub errors: Errors,
    pub submit_outcome: SubmitOutcome,
    /// A submission has been sent and has not resolved yet
    pub submitting: bool,
}

impl FormState {
    pub fn value(&self, id: &str) -> Option<&Value> {
        self.values.get(id)
    }

    /// Error message for `id`, empty when the field is valid or unchecked
    pub fn error(&self, id: &str) -> &str {
        self.errors.get(id).map(String::as_str).unwrap_or("")
    }

    pub fn has_errors(&self) -> bool {
        has_errors(&self.errors)
    }

    /// Whether the submit action is enabled, judged from the last validation pass
    pub fn can_submit(&self) -> bool {
        !self.submitting && !self.has_errors()
    }

    pub fn notice(&self) -> Option<Notice> {
        match self.submit_outcome {
            SubmitOutcome::Unset => None,
            SubmitOutcome::Success => Some(Notice::Success),
            SubmitOutcome::Failure if self.has_errors() => Some(Notice::Invalid),
            SubmitOutcome::Failure => Some(Notice::UnexpectedError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn errors(pairs: &[(&str, &str)]) -> Errors {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_has_errors() {
        assert!(!has_errors(&Errors::new()));
        assert!(!has_errors(&errors(&[("a", ""), ("b", "")])));
        assert!(has_errors(&errors(&[("a", ""), ("b", "This cannot be empty.")])));
    }

    #[test]
    fn test_new_state_is_empty() {
        let state = FormState::default();
        assert!(state.values.is_empty());
        assert!(state.errors.is_empty());
        assert_eq!(state.submit_outcome, SubmitOutcome::Unset);
        assert!(state.can_submit());
        assert_eq!(state.notice(), None);
        assert_eq!(state.error("anything"), "");
    }

    #[test]
    fn test_notice_priority() {
        let mut state = FormState {
            submit_outcome: SubmitOutcome::Success,
            errors: errors(&[("a", "bad")]),
            ..Default::default()
        };
        assert_eq!(state.notice(), Some(Notice::Success));

        state.submit_outcome = SubmitOutcome::Failure;
        assert_eq!(state.notice(), Some(Notice::Invalid));

        state.errors = errors(&[("a", "")]);
        assert_eq!(state.notice(), Some(Notice::UnexpectedError));
    }

    #[test]
    fn test_cannot_submit_with_errors_or_while_submitting() {
        let mut state = FormState {
            errors: errors(&[("a", "bad")]),
            ..Default::default()
        };
        assert!(!state.can_submit());

        state.errors.clear();
        state.submitting = true;
        assert!(!state.can_submit());
    }

    #[test]
    fn test_notice_messages_are_distinct() {
        assert_ne!(Notice::UnexpectedError.message(), Notice::Invalid.message());
        assert!(!Notice::Success.is_error());
        assert!(Notice::Invalid.is_error());
    }
}
