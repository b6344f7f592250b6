// commerce/src/models/order.rs

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One order line, copied from the cart at submission time. Item details
/// are snapshotted so later catalog edits never rewrite order history.
#[derive(Debug, Clone, Serialize)]
pub struct OrderLine {
  pub item_id: i64,
  pub name: String,
  pub description: Option<String>,
  pub price_cents: i64,
  pub quantity: i32,
}

/// A submitted order as served to clients.
#[derive(Debug, Clone, Serialize)]
pub struct OrderView {
  pub id: i64,
  pub user_id: i64,
  pub items: Vec<OrderLine>,
  pub total_cents: i64,
  pub created_at: DateTime<Utc>,
}
