use super::{next_control_id, FormGroup};
use contracts::shared::inline_edit::InputKind;
use leptos::html;
use leptos::prelude::*;

/// Keyboard hint for soft keyboards on the front-desk tablets.
fn input_mode(kind: InputKind) -> &'static str {
    match kind {
        InputKind::Email => "email",
        InputKind::Tel => "tel",
        InputKind::Number => "decimal",
        InputKind::Text | InputKind::Textarea | InputKind::Date => "text",
    }
}

/// Text control for any [`InputKind`]; `Textarea` renders a `<textarea>`.
///
/// Emits the raw string on every keystroke.
#[component]
pub fn TextInput(
    #[prop(optional)] kind: InputKind,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional)] required: bool,
    /// Rows of a multi-line control
    #[prop(optional)]
    rows: Option<u32>,
    #[prop(optional)] node_ref: Option<NodeRef<html::Input>>,
) -> impl IntoView {
    let control_id = next_control_id(kind.as_str());
    let placeholder = move || placeholder.get().unwrap_or_default();

    let control = if kind.is_multiline() {
        view! {
            <textarea
                id=control_id.clone()
                class="form__textarea"
                rows=rows.unwrap_or(3)
                placeholder=placeholder
                disabled=move || disabled.get()
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
        }
        .into_any()
    } else {
        let node_ref = node_ref.unwrap_or_else(NodeRef::new);
        view! {
            <input
                node_ref=node_ref
                id=control_id.clone()
                class="form__input"
                type=kind.as_str()
                inputmode=input_mode(kind)
                placeholder=placeholder
                disabled=move || disabled.get()
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        }
        .into_any()
    };

    view! {
        <FormGroup label=label control_id=control_id required=required>
            {control}
        </FormGroup>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_mode_follows_kind() {
        assert_eq!(input_mode(InputKind::Tel), "tel");
        assert_eq!(input_mode(InputKind::Number), "decimal");
        assert_eq!(input_mode(InputKind::Textarea), "text");
    }
}
