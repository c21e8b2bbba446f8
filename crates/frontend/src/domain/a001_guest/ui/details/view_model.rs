use super::model;
use crate::shared::inline_edit::FieldEditor;
use contracts::domain::a001_guest::{validate_guest_field, GuestField, GuestView};
use contracts::shared::inline_edit::{FieldPatch, FieldValue};
use leptos::prelude::*;

/// ViewModel for the guest details page
///
/// Owns the committed guest and one [`FieldEditor`] per field, so each field
/// edits and saves independently of the others.
#[derive(Clone, Copy)]
pub struct GuestDetailsViewModel {
    pub guest: RwSignal<Option<GuestView>>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    /// Message of the success modal, `None` while hidden
    pub saved: RwSignal<Option<String>>,
    editors: [FieldEditor; GuestField::ALL.len()],
}

impl GuestDetailsViewModel {
    pub fn new() -> Self {
        let editors = [(); GuestField::ALL.len()].map(|_| FieldEditor::new());
        Self {
            guest: RwSignal::new(None),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            saved: RwSignal::new(None),
            editors,
        }
    }

    pub fn editor(&self, field: GuestField) -> FieldEditor {
        self.editors[field as usize]
    }

    fn set_all_disabled(&self, disabled: bool) {
        for editor in self.editors {
            editor.set_disabled(disabled);
        }
    }

    /// Committed value of `field`, or an empty value of its shape before load.
    pub fn committed(&self, field: GuestField) -> Signal<FieldValue> {
        let guest = self.guest;
        Signal::derive(move || {
            guest.with(|g| match g {
                Some(g) => g.field_value(field),
                None => field.shape().empty_value(),
            })
        })
    }

    /// Load the guest; fields stay disabled until it arrives.
    pub fn load(&self, id: String) {
        let vm = *self;
        vm.set_all_disabled(true);
        vm.loading.set(true);
        vm.error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_guest(&id).await {
                Ok(dto) => {
                    vm.guest.set(Some(GuestView::from_dto(dto)));
                    vm.set_all_disabled(false);
                }
                Err(e) => {
                    log::error!("failed to load guest {}: {}", id, e);
                    vm.error.set(Some(format!("Error al cargar el huésped: {}", e)));
                }
            }
            vm.loading.set(false);
        });
    }

    pub fn edit(&self, field: GuestField) {
        let value = self.guest.with_untracked(|g| match g {
            Some(g) => g.field_value(field),
            None => field.shape().empty_value(),
        });
        self.editor(field).begin(&value);
    }

    pub fn change(&self, field: GuestField, patch: FieldPatch) {
        self.editor(field).change(patch);
    }

    pub fn cancel(&self, field: GuestField) {
        self.editor(field).cancel();
    }

    /// Validate and persist `field`, committing it into the guest on success.
    pub fn save(&self, field: GuestField) {
        let guest = self.guest;
        let saved = self.saved;
        self.editor(field).save(
            move |value| validate_guest_field(field, value),
            move |value| {
                let request = guest.with_untracked(|g| match g {
                    Some(g) => g
                        .field_update(field, &value)
                        .map(|update| (g.id.to_string(), update)),
                    None => Err("Huésped no cargado".to_string()),
                });
                async move {
                    let (id, update) = request?;
                    model::patch_guest_field(&id, &update).await
                }
            },
            move |committed| {
                guest.update(|g| {
                    if let Some(g) = g {
                        if let Err(e) = g.set_field(field, committed) {
                            log::error!("cannot commit {}: {}", field.key(), e);
                        }
                    }
                });
                log::info!("guest field {} saved", field.key());
                saved.set(Some(format!("{} actualizado correctamente", field.label())));
            },
        );
    }
}

impl Default for GuestDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
