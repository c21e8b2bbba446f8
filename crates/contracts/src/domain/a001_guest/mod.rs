pub mod aggregate;
pub mod fields;
pub mod view;

pub use aggregate::{GuestDto, GuestFieldUpdate, GuestId};
pub use fields::{GuestField, GuestFieldShape};
pub use view::{validate_guest_field, GuestView};
