use crate::shared::components::ui::TextInput;
use contracts::shared::inline_edit::FieldConfig;
use leptos::prelude::*;

/// Labelled input for one sub-field of a record.
#[component]
pub fn SlotInput(
    config: FieldConfig,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <TextInput
            kind=config.input_kind
            label=config.label
            value=value
            on_input=on_input
            placeholder=config.placeholder.unwrap_or_default()
            disabled=disabled
            required=config.required
        />
    }
}
