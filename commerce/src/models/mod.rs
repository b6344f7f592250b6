// commerce/src/models/mod.rs

//! Contains data structures representing database entities and the views
//! the API serves.

// Declare child modules for each model
pub mod cart;
pub mod item;
pub mod order;
pub mod user;

// Re-export the model structs for convenient access
pub use cart::{CartLine, CartView};
pub use item::Item;
pub use order::{OrderLine, OrderView};
pub use user::User;
