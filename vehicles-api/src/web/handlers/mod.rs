// vehicles-api/src/web/handlers/mod.rs

pub mod car_handlers;
