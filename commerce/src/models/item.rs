// commerce/src/models/item.rs

use serde::Serialize;
use sqlx::FromRow;

/// A purchasable item. Prices are decimal cents to keep totals exact.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Item {
  pub id: i64,
  pub name: String,
  pub description: Option<String>, // Description can be optional
  pub price_cents: i64,
}
