// pricing-service/src/lib.rs

//! Standalone price quoting microservice: one endpoint returning a
//! pseudo-random price per vehicle ID.

pub mod config;
pub mod errors;
pub mod pricing;
pub mod web;
