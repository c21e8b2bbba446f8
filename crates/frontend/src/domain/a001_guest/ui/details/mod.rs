//! Guest Details UI Module
//!
//! MVVM split:
//! - model.rs: API functions (fetch, per-field patch)
//! - view_model.rs: committed guest, one edit session per field, save commands
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub use view::GuestDetails;
pub use view_model::GuestDetailsViewModel;
