//! Common types for all front-desk entities

pub mod aggregate_id;

pub use aggregate_id::AggregateId;
