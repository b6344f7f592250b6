// commerce/src/services/item_service.rs

use crate::errors::{AppError, Result};
use crate::models::Item;
use sqlx::PgPool;
use tracing::{instrument, warn};

/// Lists the whole catalog.
#[instrument(name = "item_service::list", skip(db_pool), err(Display))]
pub async fn list(db_pool: &PgPool) -> Result<Vec<Item>> {
  let items: Vec<Item> = sqlx::query_as("SELECT id, name, description, price_cents FROM items ORDER BY id ASC")
    .fetch_all(db_pool)
    .await?;
  Ok(items)
}

/// Fetches one item by id.
#[instrument(name = "item_service::find_by_id", skip(db_pool), err(Display))]
pub async fn find_by_id(db_pool: &PgPool, id: i64) -> Result<Item> {
  let item: Option<Item> = sqlx::query_as("SELECT id, name, description, price_cents FROM items WHERE id = $1")
    .bind(id)
    .fetch_optional(db_pool)
    .await?;

  item.ok_or_else(|| AppError::NotFound(format!("Item with id {} not found.", id)))
}

/// Fetches all items sharing a name; an empty result is a not-found.
#[instrument(name = "item_service::find_by_name", skip(db_pool), err(Display))]
pub async fn find_by_name(db_pool: &PgPool, name: &str) -> Result<Vec<Item>> {
  let items: Vec<Item> = sqlx::query_as("SELECT id, name, description, price_cents FROM items WHERE name = $1 ORDER BY id ASC")
    .bind(name)
    .fetch_all(db_pool)
    .await?;

  if items.is_empty() {
    warn!("No items found with name '{}'.", name);
    return Err(AppError::NotFound(format!("No items found with name '{}'.", name)));
  }
  Ok(items)
}
