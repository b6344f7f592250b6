// vehicles-api/src/lib.rs

//! Vehicles API: vehicle CRUD over a relational store, with price and
//! location data gathered from two downstream services on single-car reads.

pub mod clients;
pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod services;
pub mod state;
pub mod web;
