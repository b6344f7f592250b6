// commerce/src/web/handlers/order_handlers.rs

use actix_web::{web, HttpResponse};
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::services::order_service;
use crate::state::AppState;
use crate::web::auth::AuthenticatedUser;

#[instrument(name = "handler::submit_order", skip(app_state, path, _auth_user), fields(req_username = %path.as_ref()))]
pub async fn submit_order_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  _auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let username = path.into_inner();
  let order = order_service::submit(&app_state.db_pool, &username).await?;
  info!("Order {} submitted for user {}.", order.id, username);
  Ok(HttpResponse::Ok().json(order))
}

#[instrument(name = "handler::order_history", skip(app_state, path, _auth_user), fields(req_username = %path.as_ref()))]
pub async fn order_history_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  _auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let username = path.into_inner();
  let orders = order_service::history(&app_state.db_pool, &username).await?;
  Ok(HttpResponse::Ok().json(orders))
}
