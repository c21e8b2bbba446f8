//! Edit Session: the per-field state machine owned by the parent view.
//!
//! ```text
//!   Display --begin/mark_editing--> Editing --request_save--> Updating
//!      ^                              |  ^                       |
//!      +-------------cancel-----------+  +-----save_failed-------+
//!      +-------------------------save_succeeded-------------------+
//! ```
//!
//! Renderers never call into the session; they emit intents and the parent
//! drives the transitions.

use super::actions::ActionState;
use super::error::EditError;
use super::patch::FieldPatch;
use super::value::FieldValue;

#[derive(Debug, Clone, PartialEq)]
pub struct EditSession<T> {
    is_editing: bool,
    edit_value: Option<T>,
    is_updating: bool,
    /// Value handed out by the save in flight; this is what gets committed.
    in_flight: Option<T>,
    disabled: bool,
    last_error: Option<String>,
}

impl<T> Default for EditSession<T> {
    fn default() -> Self {
        Self {
            is_editing: false,
            edit_value: None,
            is_updating: false,
            in_flight: None,
            disabled: false,
            last_error: None,
        }
    }
}

impl<T: Clone> EditSession<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_editing(&self) -> bool {
        self.is_editing
    }

    pub fn is_updating(&self) -> bool {
        self.is_updating
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Working copy. `None` outside edit mode.
    pub fn edit_value(&self) -> Option<&T> {
        if self.is_editing {
            self.edit_value.as_ref()
        } else {
            None
        }
    }

    /// Message of the last rejected save or failed validation.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Enter edit mode with `committed` snapshotted into the working copy.
    pub fn begin(&mut self, committed: &T) -> Result<(), EditError> {
        self.mark_editing()?;
        self.edit_value = Some(committed.clone());
        Ok(())
    }

    /// Enter edit mode without touching the working copy.
    ///
    /// This is the bare `on_edit` intent: `edit_value` is NOT populated.
    /// Callers follow it with [`set_edit_value`](Self::set_edit_value) or use
    /// [`begin`](Self::begin) instead. The guest page always uses `begin`.
    pub fn mark_editing(&mut self) -> Result<(), EditError> {
        if self.disabled {
            return Err(EditError::Disabled);
        }
        if self.is_updating {
            return Err(EditError::Busy);
        }
        self.is_editing = true;
        self.last_error = None;
        log::debug!("edit session: editing");
        Ok(())
    }

    /// Seed the working copy after [`mark_editing`](Self::mark_editing).
    /// Refused while a save is in flight.
    pub fn set_edit_value(&mut self, value: T) -> Result<(), EditError> {
        if !self.is_editing {
            return Err(EditError::NotEditing);
        }
        if self.is_updating {
            return Err(EditError::Busy);
        }
        self.edit_value = Some(value);
        Ok(())
    }

    /// Start a save. Returns the value the parent must persist.
    pub fn request_save(&mut self) -> Result<T, EditError> {
        self.request_save_checked(|_| Ok(()))
    }

    /// Start a save after `check` accepts the working copy.
    ///
    /// A rejected check leaves the session editing and idle, with the
    /// message kept in [`last_error`](Self::last_error).
    pub fn request_save_checked(
        &mut self,
        check: impl FnOnce(&T) -> Result<(), String>,
    ) -> Result<T, EditError> {
        if !self.is_editing {
            return Err(EditError::NotEditing);
        }
        if self.is_updating {
            return Err(EditError::Busy);
        }
        if self.disabled {
            return Err(EditError::Disabled);
        }
        let value = self.edit_value.clone().ok_or(EditError::NotEditing)?;
        if let Err(message) = check(&value) {
            self.last_error = Some(message.clone());
            return Err(EditError::Invalid(message));
        }
        self.is_updating = true;
        self.in_flight = Some(value.clone());
        self.last_error = None;
        log::debug!("edit session: save requested");
        Ok(value)
    }

    /// The write succeeded: leave edit mode and hand back the value that was
    /// persisted.
    pub fn save_succeeded(&mut self) -> Option<T> {
        if !self.is_updating {
            log::warn!("edit session: save_succeeded without a save in flight");
            return None;
        }
        let committed = self.in_flight.take();
        self.edit_value = None;
        self.is_updating = false;
        self.is_editing = false;
        self.last_error = None;
        log::debug!("edit session: committed");
        committed
    }

    /// The write failed: stay in edit mode with the user's input intact.
    pub fn save_failed(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        log::warn!("edit session: save failed: {}", reason);
        self.is_updating = false;
        self.in_flight = None;
        self.last_error = Some(reason);
    }

    /// Discard the working copy. Follows the same disabled policy as save.
    pub fn cancel(&mut self) -> Result<(), EditError> {
        if !self.is_editing {
            return Err(EditError::NotEditing);
        }
        if self.is_updating {
            return Err(EditError::Busy);
        }
        if self.disabled {
            return Err(EditError::Disabled);
        }
        self.is_editing = false;
        self.edit_value = None;
        self.last_error = None;
        log::debug!("edit session: cancelled");
        Ok(())
    }

    pub fn actions(&self) -> ActionState {
        ActionState::from_flags(self.is_editing, self.is_updating, self.disabled)
    }
}

impl EditSession<FieldValue> {
    /// Apply a renderer patch to the working copy.
    pub fn apply(&mut self, patch: FieldPatch) -> Result<(), EditError> {
        if !self.is_editing {
            return Err(EditError::NotEditing);
        }
        if self.is_updating {
            return Err(EditError::Busy);
        }
        let value = self.edit_value.as_mut().ok_or(EditError::NotEditing)?;
        patch.apply(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::inline_edit::value::{Record, ScalarValue};

    fn scalar(s: &str) -> FieldValue {
        FieldValue::Scalar(ScalarValue::text(s))
    }

    #[test]
    fn test_begin_snapshots_committed_value() {
        let committed = scalar("Ana");
        let mut session = EditSession::new();
        assert_eq!(session.edit_value(), None);

        session.begin(&committed).unwrap();
        assert!(session.is_editing());
        assert_eq!(session.edit_value(), Some(&committed));
    }

    #[test]
    fn test_mark_editing_leaves_working_copy_empty() {
        let mut session: EditSession<FieldValue> = EditSession::new();
        session.mark_editing().unwrap();
        assert!(session.is_editing());
        assert_eq!(session.edit_value(), None);
        assert_eq!(session.request_save(), Err(EditError::NotEditing));

        session.set_edit_value(scalar("x")).unwrap();
        assert_eq!(session.request_save(), Ok(scalar("x")));
    }

    #[test]
    fn test_successful_save_commits_and_resets() {
        let mut session = EditSession::new();
        session.begin(&scalar("Ana")).unwrap();
        session.apply(FieldPatch::Set(ScalarValue::text("Ana María"))).unwrap();

        let to_persist = session.request_save().unwrap();
        assert_eq!(to_persist, scalar("Ana María"));
        assert!(session.is_updating());

        let committed = session.save_succeeded();
        assert_eq!(committed, Some(scalar("Ana María")));
        assert!(!session.is_editing());
        assert!(!session.is_updating());
        assert_eq!(session.edit_value(), None);
    }

    #[test]
    fn test_failed_save_keeps_user_input() {
        let mut session = EditSession::new();
        session.begin(&scalar("old")).unwrap();
        session.apply(FieldPatch::Set(ScalarValue::text("typed"))).unwrap();
        session.request_save().unwrap();

        session.save_failed("HTTP 500");
        assert!(session.is_editing());
        assert!(!session.is_updating());
        assert_eq!(session.edit_value(), Some(&scalar("typed")));
        assert_eq!(session.last_error(), Some("HTTP 500"));
        assert!(session.actions().save_enabled);

        // resubmission goes through with the same input
        assert_eq!(session.request_save(), Ok(scalar("typed")));
    }

    #[test]
    fn test_second_save_while_in_flight_is_rejected() {
        let mut session = EditSession::new();
        session.begin(&scalar("a")).unwrap();
        session.request_save().unwrap();
        assert_eq!(session.request_save(), Err(EditError::Busy));
        assert_eq!(session.cancel(), Err(EditError::Busy));
        assert_eq!(
            session.apply(FieldPatch::Set(ScalarValue::Empty)),
            Err(EditError::Busy)
        );
        assert!(!session.actions().save_enabled);
        assert!(session.actions().busy);
    }

    #[test]
    fn test_working_copy_is_frozen_while_saving() {
        let mut session = EditSession::new();
        session.begin(&scalar("old")).unwrap();
        let to_persist = session.request_save().unwrap();
        assert_eq!(to_persist, scalar("old"));

        assert_eq!(session.set_edit_value(scalar("changed")), Err(EditError::Busy));
        assert_eq!(
            session.apply(FieldPatch::Set(ScalarValue::text("changed2"))),
            Err(EditError::Busy)
        );
        assert_eq!(session.edit_value(), Some(&scalar("old")));

        // what gets committed is exactly what was persisted
        assert_eq!(session.save_succeeded(), Some(to_persist));
        assert_eq!(session.edit_value(), None);
    }

    #[test]
    fn test_disabled_blocks_save_and_cancel() {
        let mut session = EditSession::new();
        session.begin(&scalar("a")).unwrap();
        session.set_disabled(true);
        assert_eq!(session.request_save(), Err(EditError::Disabled));
        assert_eq!(session.cancel(), Err(EditError::Disabled));
        let actions = session.actions();
        assert!(actions.visible && !actions.save_enabled && !actions.cancel_enabled);

        session.set_disabled(false);
        session.cancel().unwrap();
        assert!(!session.is_editing());
    }

    #[test]
    fn test_cancel_discards_working_copy() {
        let committed = scalar("kept");
        let mut session = EditSession::new();
        session.begin(&committed).unwrap();
        session.apply(FieldPatch::Set(ScalarValue::text("dropped"))).unwrap();
        session.cancel().unwrap();
        assert_eq!(session.edit_value(), None);

        // next edit starts again from the committed value
        session.begin(&committed).unwrap();
        assert_eq!(session.edit_value(), Some(&committed));
    }

    #[test]
    fn test_rejected_check_stays_editable() {
        let mut session = EditSession::new();
        session.begin(&FieldValue::Record(Record::new())).unwrap();
        let result = session.request_save_checked(|_| Err("Calle no puede estar vacío".into()));
        assert_eq!(
            result,
            Err(EditError::Invalid("Calle no puede estar vacío".into()))
        );
        assert!(session.is_editing());
        assert!(!session.is_updating());
        assert_eq!(session.last_error(), Some("Calle no puede estar vacío"));
    }

    #[test]
    fn test_patches_outside_edit_mode_are_refused() {
        let mut session: EditSession<FieldValue> = EditSession::new();
        assert_eq!(
            session.apply(FieldPatch::Set(ScalarValue::Empty)),
            Err(EditError::NotEditing)
        );
        assert_eq!(session.cancel(), Err(EditError::NotEditing));
        assert_eq!(session.save_succeeded(), None);
        assert!(!session.actions().visible);
    }
}
