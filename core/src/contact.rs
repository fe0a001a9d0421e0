//! The "contact us" form shared by the browser UI and the server

use crate::field::{Editor, FieldError, FieldSpec, Fields};
use crate::rules::Validation;

/// Default path the contact form posts to
pub const CONTACT_US_ACTION: &str = "/api/contactus";

pub const NOTES_MAX_LENGTH: u64 = 1000;

pub const CONTACT_REASONS: [&str; 5] = ["", "Marketing", "Support", "Feedback", "Jobs"];

/// Field set of the contact form, in display order
pub fn contact_us_fields() -> Result<Fields, FieldError> {
    Fields::new([
        FieldSpec::new("name")
            .label("Your name")
            .validation(Validation::required()),
        FieldSpec::new("email")
            .label("Your email address")
            .validation(Validation::all([Validation::required(), Validation::is_email()])),
        FieldSpec::new("reason")
            .label("Reason you need to contact us")
            .editor(Editor::Dropdown)
            .options(CONTACT_REASONS)
            .validation(Validation::required()),
        FieldSpec::new("notes")
            .label("Additional notes")
            .editor(Editor::MultilineTextBox)
            .validation(Validation::max_length(NOTES_MAX_LENGTH)),
    ])
}
