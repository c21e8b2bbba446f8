/// Arrangement of the save/cancel pair. Presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionLayout {
    #[default]
    Inline,
    Stacked,
}

impl ActionLayout {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Inline => "inline-edit__actions",
            Self::Stacked => "inline-edit__actions inline-edit__actions--stacked",
        }
    }
}

/// Interactive state of the save/cancel affordances for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActionState {
    /// Buttons are rendered at all (edit mode only).
    pub visible: bool,
    pub save_enabled: bool,
    pub cancel_enabled: bool,
    /// Spinner replaces the save icon.
    pub busy: bool,
}

impl ActionState {
    /// Both buttons go inert while a save is in flight or the field is disabled.
    pub fn from_flags(is_editing: bool, is_updating: bool, disabled: bool) -> Self {
        let interactive = is_editing && !is_updating && !disabled;
        Self {
            visible: is_editing,
            save_enabled: interactive,
            cancel_enabled: interactive,
            busy: is_editing && is_updating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mode_has_no_actions() {
        for (updating, disabled) in [(false, false), (true, false), (false, true), (true, true)] {
            let state = ActionState::from_flags(false, updating, disabled);
            assert!(!state.visible);
            assert!(!state.save_enabled && !state.cancel_enabled);
        }
    }

    #[test]
    fn test_busy_or_disabled_blocks_both_buttons() {
        let idle = ActionState::from_flags(true, false, false);
        assert!(idle.save_enabled && idle.cancel_enabled && !idle.busy);

        for (updating, disabled) in [(true, false), (false, true), (true, true)] {
            let state = ActionState::from_flags(true, updating, disabled);
            assert!(state.visible);
            assert!(!state.save_enabled, "save enabled with {updating}/{disabled}");
            assert!(!state.cancel_enabled, "cancel enabled with {updating}/{disabled}");
        }
        assert!(ActionState::from_flags(true, true, false).busy);
    }
}
