//! # formkit-core
//!
//! Platform-neutral state machine behind formkit forms. It has no UI or
//! network dependencies and compiles for both the browser and the server.
//!
//! ## Building blocks
//!
//! - **Rules** ([`rules`]): pure functions `(values, field, args) -> message`
//! - **Fields** ([`field`]): immutable declarations of each input
//! - **State** ([`state`]): values, errors and the last submit outcome
//! - **Controller** ([`controller`]): blur validation, form validation, submission
//! - **Transport** ([`transport`]): the seam to the HTTP client
//!
//! ```rust
//! use formkit_core::{FieldSpec, Fields, FormController, Validation};
//!
//! let fields = Fields::new([FieldSpec::new("email").validation(Validation::required())])?;
//! let mut form = FormController::new(fields);
//! assert_eq!(form.validate("email"), "This cannot be empty.");
//!
//! form.set_value("email", "jane@example.com");
//! assert!(form.validate_form());
//! # Ok::<(), formkit_core::FieldError>(())
//! ```

pub mod contact;
pub mod controller;
pub mod field;
pub mod rules;
pub mod state;
pub mod transport;

pub use controller::{FormController, PendingSubmit, SubmitAttempt, SubmitTicket};
pub use field::{Editor, FieldError, FieldSpec, Fields};
pub use rules::Validation;
pub use state::{has_errors, Errors, FormState, Notice, SubmitOutcome, Values};
pub use transport::{SubmitTransport, TransportError};
