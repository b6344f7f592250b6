// commerce/src/lib.rs

//! Sareeta e-commerce API: user registration, JWT-based login, shopping
//! cart manipulation and order history over a relational schema.

pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod services;
pub mod state;
pub mod web;
