use leptos::prelude::*;

mod api;
mod components;

pub use api::FetchTransport;
pub use components::contact_us_form::ContactUsForm;
pub use components::field::Field;
pub use components::form::{Form, FormContext};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="mt-3">
            <ContactUsForm />
        </div>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(App);
}
