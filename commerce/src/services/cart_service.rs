// commerce/src/services/cart_service.rs

//! Cart mutation. Every mutation recomputes the cart total inside the same
//! transaction, so the "total equals sum of line prices" invariant holds
//! whatever order requests land in.

use crate::errors::{AppError, Result};
use crate::models::cart::{compute_total, CartLine, CartView};
use crate::models::Item;
use crate::services::user_service;
use sqlx::{FromRow, PgConnection, PgPool};
use tracing::{info, instrument};

/// Flat join row of `cart_items` x `items`.
#[derive(Debug, FromRow)]
struct CartLineRow {
  id: i64,
  name: String,
  description: Option<String>,
  price_cents: i64,
  quantity: i32,
}

impl From<CartLineRow> for CartLine {
  fn from(row: CartLineRow) -> Self {
    CartLine {
      item: Item {
        id: row.id,
        name: row.name,
        description: row.description,
        price_cents: row.price_cents,
      },
      quantity: row.quantity,
    }
  }
}

/// Adds `quantity` of an item to the user's cart and returns the full cart.
#[instrument(name = "cart_service::add_to_cart", skip(db_pool), err(Display))]
pub async fn add_to_cart(db_pool: &PgPool, username: &str, item_id: i64, quantity: i32) -> Result<CartView> {
  if quantity <= 0 {
    return Err(AppError::Validation("Quantity must be a positive number.".to_string()));
  }

  let user = user_service::find_by_username(db_pool, username).await?;
  ensure_item_exists(db_pool, item_id).await?;

  let mut tx = db_pool.begin().await?;
  let cart_id = cart_id_for_user(&mut *tx, user.id).await?;

  sqlx::query(
    "INSERT INTO cart_items (cart_id, item_id, quantity) VALUES ($1, $2, $3) \
     ON CONFLICT (cart_id, item_id) DO UPDATE SET quantity = cart_items.quantity + EXCLUDED.quantity",
  )
  .bind(cart_id)
  .bind(item_id)
  .bind(quantity)
  .execute(&mut *tx)
  .await?;

  let view = refresh_cart(&mut *tx, cart_id, user.id).await?;
  tx.commit().await?;

  info!(
    "Added {} x item {} to cart {} of user {}.",
    quantity, item_id, cart_id, username
  );
  Ok(view)
}

/// Removes up to `quantity` of an item from the user's cart; removing more
/// than present just clears that line.
#[instrument(name = "cart_service::remove_from_cart", skip(db_pool), err(Display))]
pub async fn remove_from_cart(db_pool: &PgPool, username: &str, item_id: i64, quantity: i32) -> Result<CartView> {
  if quantity <= 0 {
    return Err(AppError::Validation("Quantity must be a positive number.".to_string()));
  }

  let user = user_service::find_by_username(db_pool, username).await?;
  ensure_item_exists(db_pool, item_id).await?;

  let mut tx = db_pool.begin().await?;
  let cart_id = cart_id_for_user(&mut *tx, user.id).await?;

  sqlx::query(
    "UPDATE cart_items SET quantity = GREATEST(quantity - $3, 0) \
     WHERE cart_id = $1 AND item_id = $2",
  )
  .bind(cart_id)
  .bind(item_id)
  .bind(quantity)
  .execute(&mut *tx)
  .await?;

  // Drop emptied lines so they never serialize as zero-quantity entries.
  sqlx::query("DELETE FROM cart_items WHERE cart_id = $1 AND quantity <= 0")
    .bind(cart_id)
    .execute(&mut *tx)
    .await?;

  let view = refresh_cart(&mut *tx, cart_id, user.id).await?;
  tx.commit().await?;

  info!(
    "Removed {} x item {} from cart {} of user {}.",
    quantity, item_id, cart_id, username
  );
  Ok(view)
}

/// Loads the lines of a cart, most useful inside a surrounding transaction.
pub(crate) async fn load_lines(conn: &mut PgConnection, cart_id: i64) -> Result<Vec<CartLine>> {
  let rows: Vec<CartLineRow> = sqlx::query_as(
    "SELECT i.id, i.name, i.description, i.price_cents, ci.quantity \
     FROM cart_items ci \
     JOIN items i ON i.id = ci.item_id \
     WHERE ci.cart_id = $1 \
     ORDER BY i.id ASC",
  )
  .bind(cart_id)
  .fetch_all(conn)
  .await?;

  Ok(rows.into_iter().map(CartLine::from).collect())
}

pub(crate) async fn cart_id_for_user(conn: &mut PgConnection, user_id: i64) -> Result<i64> {
  let cart_id: Option<i64> = sqlx::query_scalar("SELECT id FROM carts WHERE user_id = $1")
    .bind(user_id)
    .fetch_optional(conn)
    .await?;

  // Carts are created alongside users; a missing cart is data corruption.
  cart_id.ok_or_else(|| AppError::Internal(format!("User {} has no cart.", user_id)))
}

async fn ensure_item_exists(db_pool: &PgPool, item_id: i64) -> Result<()> {
  let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM items WHERE id = $1)")
    .bind(item_id)
    .fetch_one(db_pool)
    .await?;

  if exists {
    Ok(())
  } else {
    Err(AppError::NotFound(format!("Item with id {} not found.", item_id)))
  }
}

/// Recomputes and persists the cart total, then returns the current view.
async fn refresh_cart(conn: &mut PgConnection, cart_id: i64, user_id: i64) -> Result<CartView> {
  let lines = load_lines(conn, cart_id).await?;
  let total_cents = compute_total(&lines);

  sqlx::query("UPDATE carts SET total_cents = $1 WHERE id = $2")
    .bind(total_cents)
    .bind(cart_id)
    .execute(conn)
    .await?;

  Ok(CartView {
    id: cart_id,
    user_id,
    items: lines,
    total_cents,
  })
}
