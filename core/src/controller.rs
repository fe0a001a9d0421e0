//! Form controller
//!
//! Owns the [`FormState`] of one form and is the only thing that mutates it.
//! Renderers read the state and report edits through [`FormController::set_values`]
//! and blurs through [`FormController::validate`].
//!
//! Submission is split in two halves so a UI can await the transport without
//! holding the controller: [`FormController::begin_submit`] validates and
//! marks the form as in flight, [`FormController::finish_submit`] records the
//! outcome. Each begin hands out a ticket; a result carrying a stale ticket
//! is dropped.

use crate::field::Fields;
use crate::state::{has_errors, Errors, FormState, SubmitOutcome, Values};
use crate::transport::{SubmitTransport, TransportError};

/// Identifies one submission between `begin_submit` and `finish_submit`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmitTicket(u64);

/// A validated submission waiting to be sent
#[derive(Clone, Debug)]
pub struct PendingSubmit {
    pub ticket: SubmitTicket,
    pub payload: Values,
}

#[derive(Clone, Debug)]
pub enum SubmitAttempt {
    /// Every field passed; send `payload` and report back with `ticket`
    Ready(PendingSubmit),
    /// At least one field failed validation; nothing is sent
    Invalid,
    /// A previous submission has not resolved yet
    InFlight,
}

#[derive(Debug)]
pub struct FormController {
    fields: Fields,
    state: FormState,
    generation: u64,
}

impl FormController {
    /// Starts with the declared default of every field that has one
    pub fn new(fields: Fields) -> Self {
        let values = fields
            .iter()
            .filter_map(|spec| Some((spec.id().to_string(), spec.default_value()?.clone())))
            .collect();
        Self {
            fields,
            state: FormState {
                values,
                ..FormState::default()
            },
            generation: 0,
        }
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn values(&self) -> &Values {
        &self.state.values
    }

    pub fn errors(&self) -> &Errors {
        &self.state.errors
    }

    pub fn submit_outcome(&self) -> SubmitOutcome {
        self.state.submit_outcome
    }

    pub fn has_errors(&self) -> bool {
        has_errors(&self.state.errors)
    }

    /// Merges `partial` into the current values; later keys win
    pub fn set_values(&mut self, partial: Values) {
        self.state.values.extend(partial);
    }

    pub fn set_value(&mut self, id: impl Into<String>, value: impl Into<serde_json::Value>) {
        self.state.values.insert(id.into(), value.into());
    }

    /// Re-runs the rule bound to `field_name` and records its message.
    ///
    /// Fields without a rule always validate to an empty message.
    pub fn validate(&mut self, field_name: &str) -> String {
        let message = self
            .fields
            .get(field_name)
            .and_then(|spec| spec.rule())
            .map(|rule| rule.run(&self.state.values, field_name))
            .unwrap_or_default();

        if !message.is_empty() {
            log::debug!("field {} failed validation: {}", field_name, message);
        }
        self.state
            .errors
            .insert(field_name.to_string(), message.clone());
        message
    }

    /// Validates every declared field and replaces the error map.
    ///
    /// Returns true when no field reported a message.
    pub fn validate_form(&mut self) -> bool {
        let ids: Vec<String> = self.fields.ids().map(str::to_string).collect();
        let mut errors = Errors::with_capacity(ids.len());
        for id in ids {
            let message = self.validate(&id);
            errors.insert(id, message);
        }
        self.state.errors = errors;
        !self.has_errors()
    }

    /// Validates the form and, if it passes, marks a submission as in flight.
    ///
    /// An invalid form leaves the submit outcome untouched.
    pub fn begin_submit(&mut self) -> SubmitAttempt {
        if self.state.submitting {
            log::debug!("ignoring submit while another is in flight");
            return SubmitAttempt::InFlight;
        }
        if !self.validate_form() {
            return SubmitAttempt::Invalid;
        }

        self.generation += 1;
        self.state.submitting = true;
        SubmitAttempt::Ready(PendingSubmit {
            ticket: SubmitTicket(self.generation),
            payload: self.state.values.clone(),
        })
    }

    /// Records the transport result for `ticket`.
    ///
    /// Transport errors become [`SubmitOutcome::Failure`]. Returns false when
    /// the ticket is stale and the result was dropped.
    pub fn finish_submit(
        &mut self,
        ticket: SubmitTicket,
        result: Result<(), TransportError>,
    ) -> bool {
        if !self.state.submitting || ticket.0 != self.generation {
            log::debug!("dropping result of stale submission {:?}", ticket);
            return false;
        }

        self.state.submitting = false;
        self.state.submit_outcome = match result {
            Ok(()) => SubmitOutcome::Success,
            Err(e) => {
                log::warn!("form submission failed: {}", e);
                SubmitOutcome::Failure
            }
        };
        true
    }

    /// Forgets any in-flight submission so its result is dropped
    pub fn cancel_pending(&mut self) {
        if self.state.submitting {
            self.generation += 1;
            self.state.submitting = false;
        }
    }

    /// Validates, sends through `transport` when valid and records the outcome
    pub async fn submit<T>(&mut self, transport: &T) -> SubmitOutcome
    where
        T: SubmitTransport + ?Sized,
    {
        if let SubmitAttempt::Ready(pending) = self.begin_submit() {
            let result = transport.send(&pending.payload).await;
            self.finish_submit(pending.ticket, result);
        }
        self.state.submit_outcome
    }
}
