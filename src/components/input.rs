//! Labelled text input used by the sign form.

use leptos::prelude::*;

/// Change event emitted by [`Input`], carrying the input's `name` and value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldChange {
    pub name: String,
    pub value: String,
}

/// A labelled `<input>` that reports every edit through `on_change`.
#[component]
pub fn Input(
    input_type: &'static str,
    name: &'static str,
    #[prop(into)] value: Signal<String>,
    label: &'static str,
    placeholder: &'static str,
    on_change: Callback<FieldChange>,
) -> impl IntoView {
    view! {
        <label class="sign-field" for=name>
            <span class="sign-field__label">{label}</span>
            <input
                class="sign-field__input"
                id=name
                type=input_type
                name=name
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| {
                    on_change.run(FieldChange { name: name.to_owned(), value: event_target_value(&ev) });
                }
            />
        </label>
    }
}
