//! Form container
//!
//! Owns a [`FormController`] in a signal and shares it with the fields
//! rendered inside it through [`FormContext`].

use formkit_core::{Fields, FormController, Notice, SubmitAttempt, SubmitOutcome, SubmitTransport};
use leptos::prelude::*;
use serde_json::Value;

use crate::api::FetchTransport;

/// Read-only view of the form state plus the callbacks fields may use
#[derive(Clone, Copy)]
pub struct FormContext {
    controller: RwSignal<FormController>,
}

impl FormContext {
    fn new(controller: RwSignal<FormController>) -> Self {
        Self { controller }
    }

    pub fn value(&self, id: &str) -> Option<Value> {
        self.controller.with(|c| c.values().get(id).cloned())
    }

    pub fn error(&self, id: &str) -> String {
        self.controller.with(|c| c.state().error(id).to_string())
    }

    pub fn submit_outcome(&self) -> SubmitOutcome {
        self.controller.with(|c| c.submit_outcome())
    }

    pub fn set_value(&self, id: &str, value: String) {
        self.controller.update(|c| c.set_value(id, value));
    }

    pub fn validate(&self, id: &str) -> String {
        self.controller
            .try_update(|c| c.validate(id))
            .unwrap_or_default()
    }

    fn can_submit(&self) -> bool {
        self.controller.with(|c| c.state().can_submit())
    }

    fn notice(&self) -> Option<Notice> {
        self.controller.with(|c| c.state().notice())
    }
}

fn notice_class(notice: Notice) -> &'static str {
    if notice.is_error() {
        "alert alert-danger"
    } else {
        "alert alert-info"
    }
}

/// Generic form: validates on submit and posts the values to `action`
#[component]
pub fn Form(action: String, fields: Fields, children: Children) -> impl IntoView {
    let controller = RwSignal::new(FormController::new(fields));
    let form = FormContext::new(controller);
    provide_context(form);

    // A submission still in flight when the form goes away must not land
    on_cleanup(move || {
        controller.try_update(|c| c.cancel_pending());
    });

    let transport = FetchTransport::new(action);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Some(attempt) = controller.try_update(|c| c.begin_submit()) else {
            return;
        };
        let pending = match attempt {
            SubmitAttempt::Ready(pending) => pending,
            SubmitAttempt::Invalid => {
                log::debug!("form is invalid, not submitting");
                return;
            }
            SubmitAttempt::InFlight => return,
        };

        log::debug!("submitting form to {}", transport.action());
        let transport = transport.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = transport.send(&pending.payload).await;
            if controller
                .try_update(|c| c.finish_submit(pending.ticket, result))
                .is_none()
            {
                log::debug!("form was unmounted before the submission resolved");
            }
        });
    };

    view! {
        <form on:submit=on_submit novalidate=true>
            <div class="container">
                {children()}
                <div class="form-group">
                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled=move || !form.can_submit()
                    >
                        "Submit"
                    </button>
                </div>
                {move || form.notice().map(|notice| view! {
                    <div class=notice_class(notice) role="alert">
                        {notice.message()}
                    </div>
                })}
            </div>
        </form>
    }
}
