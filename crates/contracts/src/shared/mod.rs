pub mod country;
pub mod date_time;
pub mod inline_edit;
