//! Inline-edit renderers
//!
//! Every renderer follows the same controlled contract: the parent owns the
//! committed value and the [`FieldEditor`] session, and passes down
//! `value`, `is_editing`, `edit_value`, `is_updating`, `disabled` together
//! with the `on_edit`/`on_change`/`on_save`/`on_cancel` callbacks. Renderers
//! never persist anything and never leave edit mode on their own.

pub mod action_buttons;
pub mod country_picker;
pub mod field_editor;
pub mod list_field;
pub mod nested_field;
pub mod scalar_field;
pub mod slot_input;
pub mod tags_field;

pub use action_buttons::ActionButtons;
pub use field_editor::FieldEditor;
pub use list_field::ListField;
pub use nested_field::NestedField;
pub use scalar_field::ScalarField;
pub use tags_field::TagsField;

use crate::shared::components::ui::IconButton;
use contracts::shared::inline_edit::{ActionState, FieldValue, Record, ScalarValue};
use leptos::ev::KeyboardEvent;
use leptos::prelude::*;

/// Display-mode row: label, rendered value and the edit button.
#[component]
pub fn DisplayRow(
    #[prop(into)] label: String,
    on_edit: Callback<()>,
    #[prop(into)] disabled: Signal<bool>,
    children: Children,
) -> impl IntoView {
    let edit_title = format!("Editar {}", label.to_lowercase());
    view! {
        <div class="inline-edit__display">
            <span class="inline-edit__label">{label}</span>
            <div class="inline-edit__value">{children()}</div>
            <IconButton
                icon_name="edit"
                title=edit_title
                class="inline-edit__edit"
                disabled=disabled
                on_click=on_edit
            />
        </div>
    }
}

/// Keyboard shortcuts of an open editor.
///
/// Escape cancels. Enter saves, or Ctrl+Enter when `multiline`. Both respect
/// the same enablement as the action buttons.
pub fn edit_keydown(
    multiline: bool,
    is_updating: Signal<bool>,
    disabled: Signal<bool>,
    on_save: Callback<()>,
    on_cancel: Callback<()>,
) -> impl Fn(KeyboardEvent) + Clone + 'static {
    move |ev: KeyboardEvent| {
        let state =
            ActionState::from_flags(true, is_updating.get_untracked(), disabled.get_untracked());
        match ev.key().as_str() {
            "Escape" if state.cancel_enabled => {
                ev.prevent_default();
                on_cancel.run(());
            }
            "Enter" if state.save_enabled && (!multiline || ev.ctrl_key()) => {
                ev.prevent_default();
                on_save.run(());
            }
            _ => {}
        }
    }
}

// Projections used by the renderers. A value of the wrong shape reads as empty.

pub(crate) fn scalar_of(value: &FieldValue) -> ScalarValue {
    value.as_scalar().cloned().unwrap_or_default()
}

pub(crate) fn record_of(value: &FieldValue) -> Record {
    value.as_record().cloned().unwrap_or_default()
}

pub(crate) fn records_of(value: &FieldValue) -> Vec<Record> {
    value.as_records().map(<[Record]>::to_vec).unwrap_or_default()
}

pub(crate) fn strings_of(value: &FieldValue) -> Vec<String> {
    value.as_strings().map(<[String]>::to_vec).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projections_read_mismatched_shapes_as_empty() {
        let scalar = FieldValue::Scalar(ScalarValue::text("x"));
        assert_eq!(scalar_of(&scalar), ScalarValue::text("x"));
        assert!(record_of(&scalar).is_empty());
        assert!(records_of(&scalar).is_empty());
        assert!(strings_of(&scalar).is_empty());

        let tags = FieldValue::Strings(vec!["a".into(), "b".into()]);
        assert_eq!(strings_of(&tags), vec!["a".to_string(), "b".to_string()]);
        assert_eq!(scalar_of(&tags), ScalarValue::Empty);
    }
}
