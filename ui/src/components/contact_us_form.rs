use formkit_core::contact::{contact_us_fields, CONTACT_US_ACTION};
use leptos::prelude::*;

use super::field::Field;
use super::form::Form;

#[component]
pub fn ContactUsForm() -> impl IntoView {
    let fields = match contact_us_fields() {
        Ok(fields) => fields,
        Err(e) => {
            log::error!("contact form declaration is invalid: {}", e);
            return view! {
                <div class="alert alert-danger" role="alert">
                    "The contact form is unavailable."
                </div>
            }
            .into_any();
        }
    };
    let specs: Vec<_> = fields.iter().cloned().collect();

    view! {
        <Form action=CONTACT_US_ACTION.to_string() fields=fields>
            {specs
                .into_iter()
                .map(|spec| view! { <Field spec=spec /> })
                .collect_view()}
        </Form>
    }
    .into_any()
}
