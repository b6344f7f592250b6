// vehicles-api/src/models/mod.rs

//! Contains data structures representing the vehicle domain.

pub mod car;

pub use car::{Car, CarInput, Condition, Details, Location, Manufacturer};
