//! Shared contracts of the hotel front-desk frontend
//!
//! Target-independent types and logic: the inline-edit framework, guest and
//! reservation DTOs with their view-model mappings, and date/country helpers.
//! Everything here builds and tests on the host as well as on `wasm32`.

pub mod domain;
pub mod shared;
