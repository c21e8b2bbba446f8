use thiserror::Error;

/// Errors raised by the edit session state machine and value patches.
///
/// Renderers never produce these; the parent view receives them when it
/// drives an [`EditSession`](super::EditSession) through an invalid transition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("field is not in edit mode")]
    NotEditing,

    #[error("a save is already in flight")]
    Busy,

    #[error("field is disabled")]
    Disabled,

    #[error("{0}")]
    Invalid(String),

    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("patch does not match the {expected} field shape")]
    ShapeMismatch { expected: &'static str },

    #[error("item index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("list already holds the maximum of {0} items")]
    CapacityReached(usize),
}
