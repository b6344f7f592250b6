// commerce/src/services/order_service.rs

//! Order submission and history. An order is a snapshot of the cart at
//! submission time; the cart itself is left untouched, and later cart
//! changes never affect submitted orders.

use crate::errors::Result;
use crate::models::cart::compute_total;
use crate::models::{OrderLine, OrderView};
use crate::services::{cart_service, user_service};
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgConnection, PgPool};
use tracing::{info, instrument};

#[derive(Debug, FromRow)]
struct OrderRow {
  id: i64,
  user_id: i64,
  total_cents: i64,
  created_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct OrderLineRow {
  item_id: i64,
  item_name: String,
  item_description: Option<String>,
  price_cents: i64,
  quantity: i32,
}

impl From<OrderLineRow> for OrderLine {
  fn from(row: OrderLineRow) -> Self {
    OrderLine {
      item_id: row.item_id,
      name: row.item_name,
      description: row.item_description,
      price_cents: row.price_cents,
      quantity: row.quantity,
    }
  }
}

/// Submits the user's current cart as a new order.
#[instrument(name = "order_service::submit", skip(db_pool), err(Display))]
pub async fn submit(db_pool: &PgPool, username: &str) -> Result<OrderView> {
  let user = user_service::find_by_username(db_pool, username).await?;

  let mut tx = db_pool.begin().await?;
  let cart_id = cart_service::cart_id_for_user(&mut *tx, user.id).await?;
  let lines = cart_service::load_lines(&mut *tx, cart_id).await?;
  let total_cents = compute_total(&lines);

  let order: OrderRow = sqlx::query_as(
    "INSERT INTO orders (user_id, total_cents) VALUES ($1, $2) \
     RETURNING id, user_id, total_cents, created_at",
  )
  .bind(user.id)
  .bind(total_cents)
  .fetch_one(&mut *tx)
  .await?;

  // Copy the item details line by line; the order must not reference the
  // live catalog rows for its pricing.
  for line in &lines {
    sqlx::query(
      "INSERT INTO order_items (order_id, item_id, item_name, item_description, price_cents, quantity) \
       VALUES ($1, $2, $3, $4, $5, $6)",
    )
    .bind(order.id)
    .bind(line.item.id)
    .bind(&line.item.name)
    .bind(&line.item.description)
    .bind(line.item.price_cents)
    .bind(line.quantity)
    .execute(&mut *tx)
    .await?;
  }

  tx.commit().await?;

  info!(
    "Order {} submitted for user {} with {} lines totalling {} cents.",
    order.id,
    username,
    lines.len(),
    total_cents
  );

  Ok(OrderView {
    id: order.id,
    user_id: order.user_id,
    items: lines
      .into_iter()
      .map(|line| OrderLine {
        item_id: line.item.id,
        name: line.item.name,
        description: line.item.description,
        price_cents: line.item.price_cents,
        quantity: line.quantity,
      })
      .collect(),
    total_cents: order.total_cents,
    created_at: order.created_at,
  })
}

/// Lists the user's submitted orders, oldest first, each with its lines.
#[instrument(name = "order_service::history", skip(db_pool), err(Display))]
pub async fn history(db_pool: &PgPool, username: &str) -> Result<Vec<OrderView>> {
  let user = user_service::find_by_username(db_pool, username).await?;

  let mut conn = db_pool.acquire().await?;

  let orders: Vec<OrderRow> = sqlx::query_as(
    "SELECT id, user_id, total_cents, created_at FROM orders WHERE user_id = $1 ORDER BY id ASC",
  )
  .bind(user.id)
  .fetch_all(&mut *conn)
  .await?;

  let mut views = Vec::with_capacity(orders.len());
  for order in orders {
    let lines = load_order_lines(&mut *conn, order.id).await?;
    views.push(OrderView {
      id: order.id,
      user_id: order.user_id,
      items: lines,
      total_cents: order.total_cents,
      created_at: order.created_at,
    });
  }

  Ok(views)
}

async fn load_order_lines(conn: &mut PgConnection, order_id: i64) -> Result<Vec<OrderLine>> {
  let rows: Vec<OrderLineRow> = sqlx::query_as(
    "SELECT item_id, item_name, item_description, price_cents, quantity \
     FROM order_items WHERE order_id = $1 ORDER BY item_id ASC",
  )
  .bind(order_id)
  .fetch_all(&mut *conn)
  .await?;

  Ok(rows.into_iter().map(OrderLine::from).collect())
}
