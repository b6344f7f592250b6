// vehicles-api/src/clients/mod.rs

//! HTTP clients for the two downstream services consulted on single-car
//! reads: the maps service (lat/lon -> address) and the pricing service
//! (vehicle id -> quote).

pub mod maps;
pub mod prices;

pub use maps::{Address, MapsClient};
pub use prices::{Price, PricingClient};
