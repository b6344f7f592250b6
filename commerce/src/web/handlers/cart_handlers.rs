// commerce/src/web/handlers/cart_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::services::cart_service;
use crate::state::AppState;
use crate::web::auth::AuthenticatedUser;

// --- Request DTO ---
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ModifyCartRequestPayload {
  pub username: String,
  pub item_id: i64,
  pub quantity: i32,
}

// --- Handler Implementations ---

#[instrument(
  name = "handler::add_to_cart",
  skip(app_state, req_payload, _auth_user),
  fields(req_username = %req_payload.username, item_id = %req_payload.item_id, quantity = %req_payload.quantity)
)]
pub async fn add_to_cart_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<ModifyCartRequestPayload>,
  _auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let cart = cart_service::add_to_cart(
    &app_state.db_pool,
    &req_payload.username,
    req_payload.item_id,
    req_payload.quantity,
  )
  .await?;

  info!(
    "Cart {} now totals {} cents across {} lines.",
    cart.id,
    cart.total_cents,
    cart.items.len()
  );
  Ok(HttpResponse::Ok().json(cart))
}

#[instrument(
  name = "handler::remove_from_cart",
  skip(app_state, req_payload, _auth_user),
  fields(req_username = %req_payload.username, item_id = %req_payload.item_id, quantity = %req_payload.quantity)
)]
pub async fn remove_from_cart_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<ModifyCartRequestPayload>,
  _auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let cart = cart_service::remove_from_cart(
    &app_state.db_pool,
    &req_payload.username,
    req_payload.item_id,
    req_payload.quantity,
  )
  .await?;

  info!(
    "Cart {} now totals {} cents across {} lines.",
    cart.id,
    cart.total_cents,
    cart.items.len()
  );
  Ok(HttpResponse::Ok().json(cart))
}
