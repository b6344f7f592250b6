// vehicles-api/src/services/mod.rs

pub mod car_service;

pub use car_service::CarService;
