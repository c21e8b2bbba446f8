use super::action_buttons::ActionButtons;
use super::slot_input::SlotInput;
use super::{records_of, DisplayRow};
use crate::shared::components::ui::IconButton;
use contracts::shared::inline_edit::{
    item_display, ActionLayout, FieldPatch, FieldValue, ListConfig, Record,
};
use leptos::prelude::*;

/// Renderer for an array of records.
///
/// Items are added blank and removed by index; each slot edit is reported as
/// [`FieldPatch::SetItemSlot`]. The add button disappears once
/// `config.max_items` is reached.
#[component]
pub fn ListField(
    #[prop(into)] label: String,
    config: ListConfig,
    #[prop(into)] value: Signal<FieldValue>,
    #[prop(into)] is_editing: Signal<bool>,
    #[prop(into)] edit_value: Signal<Option<FieldValue>>,
    on_change: Callback<FieldPatch>,
    on_edit: Callback<()>,
    on_save: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] is_updating: Signal<bool>,
    #[prop(optional, into)] disabled: Signal<bool>,
    /// One-line summary of an item in display mode
    #[prop(optional)]
    formatter: Option<Callback<Record, String>>,
) -> impl IntoView {
    let committed = Signal::derive(move || records_of(&value.get()));
    let working = Signal::derive(move || {
        edit_value
            .get()
            .map(|v| records_of(&v))
            .unwrap_or_default()
    });
    // Item rows are rebuilt only when the count changes, so typing keeps focus
    let working_len = Memo::new(move |_| working.with(|items| items.len()));
    let inputs_disabled = Signal::derive(move || is_updating.get() || disabled.get());

    let display_items = move || {
        let items = committed.get();
        if items.is_empty() {
            return view! { <span class="inline-edit__empty">{config.empty_message}</span> }.into_any();
        }
        view! {
            <ol class="inline-edit__items">
                {items
                    .into_iter()
                    .map(|item| {
                        let lines = match formatter {
                            Some(format) => vec![format.run(item)],
                            None => item_display(config.fields, &item),
                        };
                        view! {
                            <li class="inline-edit__item">
                                {lines
                                    .into_iter()
                                    .map(|line| view! { <div>{line}</div> })
                                    .collect_view()}
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        }
        .into_any()
    };

    let edit_items = move || {
        let len = working_len.get();
        if len == 0 {
            return view! { <p class="inline-edit__empty">{config.empty_message}</p> }.into_any();
        }
        (0..len)
            .map(|index| {
                view! {
                    <div class="inline-edit__item-card">
                        <div class="inline-edit__item-header">
                            <span>{format!("#{}", index + 1)}</span>
                            <IconButton
                                icon_name="trash"
                                title=format!("Eliminar #{}", index + 1)
                                class="inline-edit__remove"
                                disabled=inputs_disabled
                                on_click=Callback::new(move |_: ()| on_change.run(FieldPatch::RemoveItem(index)))
                            />
                        </div>
                        {config
                            .fields
                            .iter()
                            .map(|field| {
                                let key = field.key;
                                view! {
                                    <SlotInput
                                        config=*field
                                        value=Signal::derive(move || {
                                            working.with(|items| {
                                                items
                                                    .get(index)
                                                    .and_then(|item| item.get(key).cloned())
                                                    .unwrap_or_default()
                                            })
                                        })
                                        on_input=Callback::new(move |text: String| {
                                            on_change.run(FieldPatch::item_slot(index, key, text))
                                        })
                                        disabled=inputs_disabled
                                    />
                                }
                            })
                            .collect_view()}
                    </div>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="inline-edit inline-edit--list">
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
                <div class="inline-edit__editor inline-edit__group">
                    <span class="inline-edit__label">{label.clone()}</span>
                    {edit_items}
                    <Show when=move || config.can_add(working_len.get())>
                        <IconButton
                            icon_name="plus"
                            title=config.add_label
                            caption=config.add_label
                            class="inline-edit__add"
                            disabled=inputs_disabled
                            on_click=Callback::new(move |_: ()| on_change.run(FieldPatch::AddItem(config)))
                        />
                    </Show>
                    <ActionButtons
                        on_save=on_save
                        on_cancel=on_cancel
                        is_updating=is_updating
                        disabled=disabled
                        layout=ActionLayout::Stacked
                    />
                </div>
            </Show>
        </div>
    }
}
