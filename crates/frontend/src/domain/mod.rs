pub mod a001_guest;
pub mod a002_reservation;
