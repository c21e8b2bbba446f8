use super::action_buttons::ActionButtons;
use super::{edit_keydown, strings_of, DisplayRow};
use crate::shared::components::ui::TextInput;
use contracts::shared::inline_edit::{
    join_list, ActionLayout, FieldPatch, FieldValue, InputKind, EMPTY_PLACEHOLDER,
};
use leptos::prelude::*;

/// Renderer for a list of strings edited as comma-separated text.
#[component]
pub fn TagsField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<FieldValue>,
    #[prop(into)] is_editing: Signal<bool>,
    #[prop(into)] edit_value: Signal<Option<FieldValue>>,
    on_change: Callback<FieldPatch>,
    on_edit: Callback<()>,
    on_save: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] is_updating: Signal<bool>,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
) -> impl IntoView {
    let committed = Signal::derive(move || strings_of(&value.get()));
    let inputs_disabled = Signal::derive(move || is_updating.get() || disabled.get());

    let display_items = move || {
        let items = committed.get();
        if items.is_empty() {
            view! { <span class="inline-edit__text">{EMPTY_PLACEHOLDER}</span> }.into_any()
        } else {
            view! {
                <ul class="inline-edit__tags">
                    {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
                </ul>
            }
            .into_any()
        }
    };

    view! {
        <div class="inline-edit inline-edit--tags">
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
                            {display_items}
                        </DisplayRow>
                    }
                }
            >
                {
                    // Raw text survives keystrokes like a trailing ", " that
                    // the split list would drop
                    let raw = RwSignal::new(
                        edit_value
                            .get_untracked()
                            .map(|v| join_list(&strings_of(&v)))
                            .unwrap_or_default(),
                    );
                    view! {
                        <div
                            class="inline-edit__editor"
                            on:keydown=edit_keydown(true, is_updating, disabled, on_save, on_cancel)
                        >
                            <span class="inline-edit__label">{label.clone()}</span>
                            <TextInput
                                kind=InputKind::Textarea
                                value=raw
                                on_input=Callback::new(move |text: String| {
                                    raw.set(text.clone());
                                    on_change.run(FieldPatch::SetText(text));
                                })
                                placeholder=placeholder
                                disabled=inputs_disabled
                                rows=3
                            />
                            <small class="form__hint">"Separa los elementos con comas"</small>
                            <ActionButtons
                                on_save=on_save
                                on_cancel=on_cancel
                                is_updating=is_updating
                                disabled=disabled
                                layout=ActionLayout::Stacked
                            />
                        </div>
                    }
                }
            </Show>
        </div>
    }
}
