use super::action_buttons::ActionButtons;
use super::country_picker::CountryPicker;
use super::{edit_keydown, scalar_of, DisplayRow};
use crate::shared::components::ui::{OptionSelect, TextInput, Toggle};
use contracts::shared::inline_edit::{
    scalar_display, ActionLayout, FieldPatch, FieldValue, InputKind, ScalarKind, ScalarValue,
};
use leptos::prelude::*;

/// Renderer for text, email, tel, textarea, checkbox, select and country
/// fields.
#[component]
pub fn ScalarField(
    #[prop(into)] label: String,
    kind: ScalarKind,
    /// Committed value
    #[prop(into)]
    value: Signal<FieldValue>,
    #[prop(into)] is_editing: Signal<bool>,
    /// Working copy, meaningful only while editing
    #[prop(into)]
    edit_value: Signal<Option<FieldValue>>,
    on_change: Callback<FieldPatch>,
    on_edit: Callback<()>,
    on_save: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] is_updating: Signal<bool>,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
) -> impl IntoView {
    let display_text = Signal::derive(move || scalar_display(kind, &scalar_of(&value.get())));
    let working = Signal::derive(move || {
        edit_value
            .get()
            .map(|v| scalar_of(&v))
            .unwrap_or_default()
    });
    let inputs_disabled = Signal::derive(move || is_updating.get() || disabled.get());
    let set_text = Callback::new(move |text: String| {
        on_change.run(FieldPatch::Set(ScalarValue::Text(text)))
    });
    let text_value = Signal::derive(move || working.get().as_text());
    let multiline = matches!(kind, ScalarKind::Textarea);
    let label_for_edit = label.clone();

    let editor = move || match kind {
        ScalarKind::Text | ScalarKind::Email | ScalarKind::Tel | ScalarKind::Textarea => {
            let input_kind = match kind {
                ScalarKind::Email => InputKind::Email,
                ScalarKind::Tel => InputKind::Tel,
                ScalarKind::Textarea => InputKind::Textarea,
                _ => InputKind::Text,
            };
            view! {
                <TextInput
                    kind=input_kind
                    value=text_value
                    on_input=set_text
                    placeholder=placeholder
                    disabled=inputs_disabled
                    rows=4
                />
            }
            .into_any()
        }
        ScalarKind::Checkbox => view! {
            <Toggle
                label=label_for_edit.clone()
                checked=Signal::derive(move || working.get().as_bool())
                on_change=Callback::new(move |b: bool| {
                    on_change.run(FieldPatch::Set(ScalarValue::Bool(b)))
                })
                disabled=inputs_disabled
            />
        }
        .into_any(),
        ScalarKind::Select(options) => view! {
            <OptionSelect
                options=options
                value=text_value
                on_change=Callback::new(move |code: Option<String>| {
                    on_change.run(FieldPatch::Set(ScalarValue::from_option(code)))
                })
                placeholder="Seleccionar…"
                disabled=inputs_disabled
            />
        }
        .into_any(),
        ScalarKind::Country => view! {
            <CountryPicker
                selected=text_value
                on_select=set_text
                disabled=inputs_disabled
            />
        }
        .into_any(),
    };

    view! {
        <div class="inline-edit inline-edit--scalar" data-kind=kind.as_str()>
            <Show
                when=move || is_editing.get()
                fallback={
                    let label = label.clone();
                    move || view! {
                        <DisplayRow
                            label=label.clone()
                            on_edit=on_edit
                            disabled=disabled
                        >
                            {move || {
                                if matches!(kind, ScalarKind::Country) && !scalar_of(&value.get()).is_blank() {
                                    view! {
                                        <span class="inline-edit__country">
                                            <span class="inline-edit__country-code">{move || scalar_of(&value.get()).as_text()}</span>
                                            " "
                                            {display_text}
                                        </span>
                                    }
                                    .into_any()
                                } else {
                                    view! { <span class="inline-edit__text">{display_text}</span> }.into_any()
                                }
                            }}
                        </DisplayRow>
                    }
                }
            >
                <div
                    class="inline-edit__editor"
                    on:keydown=edit_keydown(multiline, is_updating, disabled, on_save, on_cancel)
                >
                    <span class="inline-edit__label">{label.clone()}</span>
                    {editor.clone()}
                    <ActionButtons
                        on_save=on_save
                        on_cancel=on_cancel
                        is_updating=is_updating
                        disabled=disabled
                        layout=if multiline { ActionLayout::Stacked } else { ActionLayout::Inline }
                    />
                </div>
            </Show>
        </div>
    }
}
