use super::action_buttons::ActionButtons;
use super::slot_input::SlotInput;
use super::{edit_keydown, record_of, DisplayRow};
use contracts::shared::inline_edit::{
    record_display, ActionLayout, FieldConfig, FieldPatch, FieldValue, Record,
};
use leptos::prelude::*;

/// Renderer for a flat record edited one sub-field at a time.
///
/// `formatter` overrides the default `"value, value"` display projection.
#[component]
pub fn NestedField(
    #[prop(into)] label: String,
    fields: &'static [FieldConfig],
    #[prop(into)] value: Signal<FieldValue>,
    #[prop(into)] is_editing: Signal<bool>,
    #[prop(into)] edit_value: Signal<Option<FieldValue>>,
    on_change: Callback<FieldPatch>,
    on_edit: Callback<()>,
    on_save: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] is_updating: Signal<bool>,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional_no_strip)] formatter: Option<Callback<Record, String>>,
) -> impl IntoView {
    let display_text = Signal::derive(move || {
        let record = record_of(&value.get());
        match formatter {
            Some(format) => format.run(record),
            None => record_display(fields, &record),
        }
    });
    let working = Signal::derive(move || {
        edit_value
            .get()
            .map(|v| record_of(&v))
            .unwrap_or_default()
    });
    let inputs_disabled = Signal::derive(move || is_updating.get() || disabled.get());

    view! {
        <div class="inline-edit inline-edit--nested">
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
                            <span class="inline-edit__text">{display_text}</span>
                        </DisplayRow>
                    }
                }
            >
                <fieldset
                    class="inline-edit__editor inline-edit__group"
                    on:keydown=edit_keydown(false, is_updating, disabled, on_save, on_cancel)
                >
                    <legend class="inline-edit__label">{label.clone()}</legend>
                    {fields
                        .iter()
                        .map(|config| {
                            let key = config.key;
                            view! {
                                <SlotInput
                                    config=*config
                                    value=Signal::derive(move || {
                                        working.with(|r| r.get(key).cloned().unwrap_or_default())
                                    })
                                    on_input=Callback::new(move |text: String| {
                                        on_change.run(FieldPatch::slot(key, text))
                                    })
                                    disabled=inputs_disabled
                                />
                            }
                        })
                        .collect_view()}
                    <ActionButtons
                        on_save=on_save
                        on_cancel=on_cancel
                        is_updating=is_updating
                        disabled=disabled
                        layout=ActionLayout::Stacked
                    />
                </fieldset>
            </Show>
        </div>
    }
}
