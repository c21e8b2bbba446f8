//! Inline-edit field framework
//!
//! Target-independent half of the inline-edit renderers: field kinds, values,
//! Field Config, the unified [`FieldPatch`] message, the parent-owned
//! [`EditSession`] state machine, display projections and validation.
//!
//! ## Usage
//!
//! ```rust
//! use contracts::shared::inline_edit::{EditSession, FieldPatch, FieldValue, ScalarValue};
//!
//! let committed = FieldValue::Scalar(ScalarValue::text("Ana"));
//! let mut session = EditSession::new();
//!
//! session.begin(&committed).unwrap();
//! session.apply(FieldPatch::Set(ScalarValue::text("Ana María"))).unwrap();
//! let to_persist = session.request_save().unwrap();
//! // ... parent performs the write ...
//! assert_eq!(session.save_succeeded(), Some(to_persist));
//! ```

mod actions;
mod config;
mod display;
mod error;
mod field_kind;
pub mod list;
mod patch;
mod session;
pub mod string_list;
mod validation;
mod value;

pub use actions::{ActionLayout, ActionState};
pub use config::{empty_record, FieldConfig, ListConfig};
pub use display::{
    item_display, item_lines, record_display, scalar_display, EMPTY_PLACEHOLDER, NO, YES,
};
pub use error::EditError;
pub use field_kind::{InputKind, ScalarKind, SelectOption};
pub use patch::FieldPatch;
pub use session::EditSession;
pub use string_list::{join_list, split_list};
pub use validation::{
    is_valid_email, is_valid_phone, validate_record, validate_records, validate_scalar,
    ValidationRules,
};
pub use value::{FieldValue, Record, ScalarValue};
