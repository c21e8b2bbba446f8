pub mod aggregate;
pub mod view;

pub use aggregate::{ReservationDto, ReservationId, ReservationQuery, ReservationStatus};
pub use view::ReservationView;
