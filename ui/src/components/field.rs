//! Field renderer
//!
//! Draws one declared field with the editor its spec names. Edits go to the
//! form through `set_value`, blurs through `validate`.

use formkit_core::{Editor, FieldSpec};
use leptos::prelude::*;
use serde_json::Value;

use super::form::FormContext;

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[component]
pub fn Field(spec: FieldSpec) -> impl IntoView {
    let form = expect_context::<FormContext>();
    let id = spec.id().to_string();

    let error = {
        let id = id.clone();
        move || form.error(&id)
    };

    let current_value = {
        let id = id.clone();
        move || form.value(&id).map(|v| value_text(&v)).unwrap_or_default()
    };

    let editor_style = {
        let error = error.clone();
        move || {
            if error().is_empty() {
                ""
            } else {
                "border-color: red"
            }
        }
    };

    let id_for_input = id.clone();
    let id_for_blur = id.clone();

    let control = match spec.editor_kind() {
        Editor::TextBox => view! {
            <input
                id=id.clone()
                type="text"
                class="form-control"
                style=editor_style
                prop:value=current_value
                on:input=move |ev| form.set_value(&id_for_input, event_target_value(&ev))
                on:blur=move |_| {
                    form.validate(&id_for_blur);
                }
            />
        }
        .into_any(),
        Editor::MultilineTextBox => view! {
            <textarea
                id=id.clone()
                class="form-control"
                style=editor_style
                prop:value=current_value
                on:input=move |ev| form.set_value(&id_for_input, event_target_value(&ev))
                on:blur=move |_| {
                    form.validate(&id_for_blur);
                }
            />
        }
        .into_any(),
        Editor::Dropdown => {
            let options = spec.option_list().to_vec();
            view! {
                <select
                    id=id.clone()
                    name=id.clone()
                    class="form-control"
                    style=editor_style
                    prop:value=current_value
                    on:change=move |ev| form.set_value(&id_for_input, event_target_value(&ev))
                    on:blur=move |_| {
                        form.validate(&id_for_blur);
                    }
                >
                    {options
                        .into_iter()
                        .map(|option| { let value = option.clone(); view! { <option value=value>{option}</option> } })
                        .collect_view()}
                </select>
            }
            .into_any()
        }
    };

    let label = spec.label_text().map(|text| {
        let text = text.to_string();
        view! { <label for=id.clone()>{text}</label> }
    });

    view! {
        <div class="form-group">
            {label}
            {control}
            {move || {
                let message = error();
                (!message.is_empty()).then(|| view! {
                    <div style="color: red; font-size: 80%">
                        <p>{message}</p>
                    </div>
                })
            }}
        </div>
    }
}
