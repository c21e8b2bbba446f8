//! Reactive wrapper around one field's [`EditSession`].
//!
//! The parent view creates one `FieldEditor` per field and wires its signals
//! and callbacks into a renderer. Renderers only ever see the signals and
//! callbacks, never the editor itself.

use contracts::shared::inline_edit::{EditError, EditSession, FieldPatch, FieldValue};
use leptos::prelude::*;
use std::future::Future;

#[derive(Clone, Copy)]
pub struct FieldEditor {
    session: RwSignal<EditSession<FieldValue>>,
}

impl FieldEditor {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(EditSession::new()),
        }
    }

    pub fn is_editing(&self) -> Signal<bool> {
        let session = self.session;
        Signal::derive(move || session.with(|s| s.is_editing()))
    }

    pub fn is_updating(&self) -> Signal<bool> {
        let session = self.session;
        Signal::derive(move || session.with(|s| s.is_updating()))
    }

    pub fn is_disabled(&self) -> Signal<bool> {
        let session = self.session;
        Signal::derive(move || session.with(|s| s.is_disabled()))
    }

    pub fn edit_value(&self) -> Signal<Option<FieldValue>> {
        let session = self.session;
        Signal::derive(move || session.with(|s| s.edit_value().cloned()))
    }

    pub fn error(&self) -> Signal<Option<String>> {
        let session = self.session;
        Signal::derive(move || session.with(|s| s.last_error().map(str::to_string)))
    }

    pub fn set_disabled(&self, disabled: bool) {
        self.session.update(|s| s.set_disabled(disabled));
    }

    /// `on_edit` handler: enters edit mode with `committed` as the working copy.
    pub fn begin(&self, committed: &FieldValue) {
        let mut result = Ok(());
        self.session.update(|s| result = s.begin(committed));
        if let Err(e) = result {
            log::debug!("edit ignored: {}", e);
        }
    }

    /// `on_change` handler.
    pub fn change(&self, patch: FieldPatch) {
        let mut result = Ok(());
        self.session.update(|s| result = s.apply(patch));
        if let Err(e) = result {
            log::warn!("change rejected: {}", e);
        }
    }

    /// `on_cancel` handler.
    pub fn cancel(&self) {
        let mut result = Ok(());
        self.session.update(|s| result = s.cancel());
        if let Err(e) = result {
            log::debug!("cancel ignored: {}", e);
        }
    }

    /// `on_save` handler.
    ///
    /// Validates the working copy with `check`, marks the session as updating
    /// and runs `persist`. On success the session leaves edit mode and
    /// `on_committed` receives the saved value; on failure the session stays
    /// in edit mode with the user's input and the error message.
    pub fn save<C, P, Fut, K>(&self, check: C, persist: P, on_committed: K)
    where
        C: FnOnce(&FieldValue) -> Result<(), String>,
        P: FnOnce(FieldValue) -> Fut,
        Fut: Future<Output = Result<(), String>> + 'static,
        K: FnOnce(FieldValue) + 'static,
    {
        let mut requested = Err(EditError::NotEditing);
        self.session
            .update(|s| requested = s.request_save_checked(check));
        let value = match requested {
            Ok(value) => value,
            Err(e) => {
                log::debug!("save not started: {}", e);
                return;
            }
        };

        let session = self.session;
        let request = persist(value);
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = request.await;
            // The owning view may be gone by the time the write returns
            let Some(outcome) = session.try_update(|s| match outcome {
                Ok(()) => Ok(s.save_succeeded()),
                Err(e) => {
                    s.save_failed(e.clone());
                    Err(e)
                }
            }) else {
                return;
            };
            match outcome {
                Ok(Some(committed)) => on_committed(committed),
                Ok(None) => {}
                Err(e) => log::warn!("save failed: {}", e),
            }
        });
    }
}

impl Default for FieldEditor {
    fn default() -> Self {
        Self::new()
    }
}
